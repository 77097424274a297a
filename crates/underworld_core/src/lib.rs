//! Underworld core: pure site state machine and view-model helpers.
mod effect;
mod form;
mod keyboard;
mod msg;
mod notify;
mod pages;
mod router;
mod search;
mod state;
mod timers;
mod update;
mod view_model;

pub use effect::{Effect, TimerId, TimerPurpose};
pub use form::{
    ContactForm, ContactKind, ContactSubmission, FormField, FormFlag, RequestId, SendOutcome,
};
pub use keyboard::{shortcut_target, Key, KeyPress};
pub use msg::Msg;
pub use notify::{Notification, NotificationId, Phase, Severity};
pub use pages::{PageId, SearchEntry, SEARCH_INDEX};
pub use router::Router;
pub use search::{search, SearchHit, SearchResults, NO_RESULTS_LABEL};
pub use state::{AppState, SiteConfig, Theme, Timings};
pub use update::update;
pub use view_model::{
    AppViewModel, FormView, HelpView, NavControlView, NotificationView, PanelView, StoryView,
};
