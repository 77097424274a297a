use crate::{
    ContactForm, ContactKind, NotificationId, PageId, SearchResults, Severity, Theme,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub active_page: PageId,
    pub breadcrumb: String,
    pub controls: Vec<NavControlView>,
    pub panels: Vec<PanelView>,
    pub search_input: String,
    pub search_results: SearchResults,
    pub notification: Option<NotificationView>,
    pub theme: Theme,
    pub theme_icon: &'static str,
    pub help: HelpView,
    pub form: FormView,
    pub story: StoryView,
    pub body_visible: bool,
    pub cards_revealed: Vec<bool>,
}

impl AppViewModel {
    pub fn active_controls(&self) -> impl Iterator<Item = PageId> + '_ {
        self.controls.iter().filter(|c| c.active).map(|c| c.page)
    }

    pub fn active_panels(&self) -> impl Iterator<Item = PageId> + '_ {
        self.panels.iter().filter(|p| p.active).map(|p| p.page)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControlView {
    pub page: PageId,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelView {
    pub page: PageId,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub icon: &'static str,
    pub color: &'static str,
    pub leaving: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpView {
    Hidden,
    Shown,
    FadingOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub fields: ContactForm,
    pub kind: ContactKind,
    pub message_label: &'static str,
    pub message_placeholder: &'static str,
    pub submit_label: &'static str,
    /// Send in flight: submit disabled, loading label shown.
    pub pending: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryView {
    pub expanded: bool,
    pub button_label: &'static str,
}
