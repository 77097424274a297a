use crate::{ContactKind, FormField, FormFlag, KeyPress, RequestId, SendOutcome, TimerId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Document finished loading; starts the fade-in and card reveal.
    PageLoaded,
    /// A navigation button carrying a `data-page` id was clicked.
    NavClicked { page: String },
    /// A quick-action button or clickable feature card was clicked.
    QuickActionClicked { page: String },
    KeyPressed(KeyPress),
    /// Search box text changed.
    SearchInputChanged(String),
    /// User picked the `index`-th row of the results surface.
    SearchResultSelected { index: usize },
    /// The toast's close button was clicked.
    NotificationCloseClicked,
    ThemeToggled,
    HelpOpened,
    HelpCloseClicked,
    /// Click landed on the modal backdrop rather than its content.
    HelpBackdropClicked,
    FormFieldChanged { field: FormField, value: String },
    FormFlagChanged { flag: FormFlag, checked: bool },
    ContactKindSelected(ContactKind),
    /// Contact form submitted; `timestamp` is the host's local time rendering.
    FormSubmitted { timestamp: String },
    FormCleared,
    /// The external send operation for `request_id` completed.
    ContactSendFinished {
        request_id: RequestId,
        outcome: SendOutcome,
    },
    /// A story's "read" button was clicked.
    StoryReadClicked { title: String },
    StoryToggled,
    TimerElapsed { timer: TimerId },
}
