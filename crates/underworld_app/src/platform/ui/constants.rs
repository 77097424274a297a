use std::fmt;

use underworld_core::{FormField, PageId};

/// Addressable single-instance slots on the presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Body,
    Breadcrumb,
    Notification,
    SearchInput,
    SearchResults,
    Help,
    ThemeToggle,
    MessageLabel,
    MessagePlaceholder,
    SubmitButton,
    Field(FormField),
    Checkbox(&'static str),
    StoryContent,
    StoryButton,
    Card(usize),
}

/// Elements that exist once per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Control(PageId),
    Panel(PageId),
}

pub const SUBMIT_PENDING_LABEL: &str = "Sending...";

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Body => f.write_str("body"),
            Slot::Breadcrumb => f.write_str("breadcrumb"),
            Slot::Notification => f.write_str("notification"),
            Slot::SearchInput => f.write_str("search-input"),
            Slot::SearchResults => f.write_str("search-results"),
            Slot::Help => f.write_str("help"),
            Slot::ThemeToggle => f.write_str("theme-toggle"),
            Slot::MessageLabel => f.write_str("message-label"),
            Slot::MessagePlaceholder => f.write_str("message-placeholder"),
            Slot::SubmitButton => f.write_str("submit"),
            Slot::Field(field) => write!(f, "field:{}", field_name(*field)),
            Slot::Checkbox(name) => write!(f, "check:{name}"),
            Slot::StoryContent => f.write_str("story"),
            Slot::StoryButton => f.write_str("story-button"),
            Slot::Card(index) => write!(f, "card:{index}"),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Control(page) => write!(f, "control:{page}"),
            Target::Panel(page) => write!(f, "panel:{page}"),
        }
    }
}

pub fn field_name(field: FormField) -> &'static str {
    match field {
        FormField::Name => "name",
        FormField::Email => "email",
        FormField::Phone => "phone",
        FormField::Location => "location",
        FormField::Service => "service",
        FormField::Budget => "budget",
        FormField::Timeline => "timeline",
        FormField::Message => "message",
    }
}
