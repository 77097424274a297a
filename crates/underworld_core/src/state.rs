use std::time::Duration;

use crate::form::PendingSend;
use crate::notify::NotificationSlot;
use crate::search::SearchState;
use crate::timers::TimerBook;
use crate::view_model::{
    AppViewModel, FormView, HelpView, NavControlView, NotificationView, PanelView, StoryView,
};
use crate::{
    ContactForm, ContactKind, ContactSubmission, Effect, FormField, FormFlag, Notification,
    NotificationId, PageId, Phase, RequestId, Router, SearchHit, Severity, TimerId, TimerPurpose,
};

/// Delays used by the notification, modal and entrance animations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timings {
    pub notification_ttl: Duration,
    pub notification_leave: Duration,
    pub help_fade: Duration,
    pub load_delay: Duration,
    pub card_stagger: Duration,
    pub story_scroll_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            notification_ttl: Duration::from_secs(5),
            notification_leave: Duration::from_millis(300),
            help_fade: Duration::from_millis(300),
            load_delay: Duration::from_millis(100),
            card_stagger: Duration::from_millis(200),
            story_scroll_delay: Duration::from_millis(100),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Navigation controls in display order; keyboard digits index into this.
    pub controls: Vec<PageId>,
    pub timings: Timings,
    /// Number of entrance cards revealed after load.
    pub card_count: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            controls: PageId::ALL.to_vec(),
            timings: Timings::default(),
            card_count: 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Icon on the toggle button.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum HelpModal {
    #[default]
    Closed,
    Open,
    Closing(TimerId),
}

/// All state owned by the site controller.
///
/// Everything that can change at runtime lives here and is only mutated
/// through [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    config: SiteConfig,
    router: Router,
    search: SearchState,
    notification: NotificationSlot,
    timers: TimerBook,
    theme: Theme,
    help: HelpModal,
    form: ContactForm,
    contact_kind: ContactKind,
    pending_send: Option<PendingSend>,
    next_request_id: RequestId,
    story_expanded: bool,
    loaded: bool,
    body_visible: bool,
    cards_revealed: Vec<bool>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(SiteConfig::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SiteConfig) -> Self {
        Self {
            router: Router::new(config.controls.clone()),
            cards_revealed: vec![false; config.card_count],
            config,
            search: SearchState::default(),
            notification: NotificationSlot::default(),
            timers: TimerBook::default(),
            theme: Theme::default(),
            help: HelpModal::default(),
            form: ContactForm::default(),
            contact_kind: ContactKind::default(),
            pending_send: None,
            next_request_id: 0,
            story_expanded: false,
            loaded: false,
            body_visible: false,
            dirty: false,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn active_page(&self) -> PageId {
        self.router.active()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.current()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn is_send_pending(&self) -> bool {
        self.pending_send.is_some()
    }

    /// What timer `timer` will do, if it is still pending.
    pub fn timer_purpose(&self, timer: TimerId) -> Option<TimerPurpose> {
        self.timers.purpose(timer)
    }

    pub fn pending_timer_count(&self) -> usize {
        self.timers.pending_count()
    }

    pub fn view(&self) -> AppViewModel {
        let active = self.router.active();
        AppViewModel {
            active_page: active,
            breadcrumb: self.router.breadcrumb().to_string(),
            controls: self
                .router
                .controls()
                .iter()
                .map(|&page| NavControlView {
                    page,
                    active: page == active,
                })
                .collect(),
            panels: PageId::ALL
                .into_iter()
                .map(|page| PanelView {
                    page,
                    active: page == active,
                })
                .collect(),
            search_input: self.search.input.clone(),
            search_results: self.search.results.clone(),
            notification: self.notification.current().map(|n| NotificationView {
                id: n.id,
                message: n.message.clone(),
                severity: n.severity,
                icon: n.severity.icon(),
                color: n.severity.color(),
                leaving: n.phase == Phase::Leaving,
            }),
            theme: self.theme,
            theme_icon: self.theme.toggle_icon(),
            help: match self.help {
                HelpModal::Closed => HelpView::Hidden,
                HelpModal::Open => HelpView::Shown,
                HelpModal::Closing(_) => HelpView::FadingOut,
            },
            form: FormView {
                fields: self.form.clone(),
                kind: self.contact_kind,
                message_label: self.contact_kind.message_label(),
                message_placeholder: self.contact_kind.message_placeholder(),
                submit_label: self.contact_kind.submit_label(),
                pending: self.pending_send.is_some(),
            },
            story: StoryView {
                expanded: self.story_expanded,
                button_label: if self.story_expanded {
                    "Close Story"
                } else {
                    "Read More"
                },
            },
            body_visible: self.body_visible,
            cards_revealed: self.cards_revealed.clone(),
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn take_timer(&mut self, timer: TimerId) -> Option<TimerPurpose> {
        self.timers.take(timer)
    }

    pub(crate) fn navigate_to(&mut self, raw: &str, effects: &mut Vec<Effect>) -> Option<PageId> {
        let page = self.router.navigate_to(raw)?;
        self.mark_dirty();
        self.notify(format!("Navigated to {}", page.title()), Severity::Info, effects);
        Some(page)
    }

    pub(crate) fn navigate_to_control(
        &mut self,
        index: usize,
        effects: &mut Vec<Effect>,
    ) -> Option<PageId> {
        let page = *self.router.controls().get(index)?;
        self.navigate_to(page.as_str(), effects)
    }

    pub(crate) fn notify(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        effects: &mut Vec<Effect>,
    ) -> NotificationId {
        let ttl = self.config.timings.notification_ttl;
        self.mark_dirty();
        self.notification
            .show(message.into(), severity, ttl, &mut self.timers, effects)
    }

    /// Starts the slide-out of the current notification, if it is visible.
    pub(crate) fn dismiss_notification(&mut self, effects: &mut Vec<Effect>) -> bool {
        let Some(id) = self.notification.current().map(|current| current.id) else {
            return false;
        };
        self.leave_notification(id, effects)
    }

    pub(crate) fn leave_notification(&mut self, id: NotificationId, effects: &mut Vec<Effect>) -> bool {
        let leave = self.config.timings.notification_leave;
        let changed = self
            .notification
            .begin_leave(id, leave, &mut self.timers, effects);
        if changed {
            self.mark_dirty();
        }
        changed
    }

    pub(crate) fn remove_notification(&mut self, id: NotificationId) -> bool {
        let removed = self.notification.remove(id);
        if removed {
            self.mark_dirty();
        }
        removed
    }

    pub(crate) fn set_search_input(&mut self, input: String) {
        self.search.set_input(input);
        self.mark_dirty();
    }

    pub(crate) fn search_hit(&self, index: usize) -> Option<SearchHit> {
        self.search.results.hit(index)
    }

    pub(crate) fn clear_search(&mut self) {
        self.search.clear();
        self.mark_dirty();
    }

    pub(crate) fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.mark_dirty();
        self.theme
    }

    pub(crate) fn open_help(&mut self, effects: &mut Vec<Effect>) -> bool {
        match self.help {
            HelpModal::Open => false,
            HelpModal::Closing(timer) => {
                self.timers.cancel(timer, effects);
                self.help = HelpModal::Open;
                self.mark_dirty();
                true
            }
            HelpModal::Closed => {
                self.help = HelpModal::Open;
                self.mark_dirty();
                true
            }
        }
    }

    pub(crate) fn close_help(&mut self, effects: &mut Vec<Effect>) -> bool {
        if self.help != HelpModal::Open {
            return false;
        }
        let fade = self.config.timings.help_fade;
        let timer = self.timers.start(fade, TimerPurpose::CloseHelp, effects);
        self.help = HelpModal::Closing(timer);
        self.mark_dirty();
        true
    }

    pub(crate) fn finish_help_close(&mut self, timer: TimerId) -> bool {
        if self.help == HelpModal::Closing(timer) {
            self.help = HelpModal::Closed;
            self.mark_dirty();
            true
        } else {
            false
        }
    }

    pub(crate) fn set_form_field(&mut self, field: FormField, value: String) {
        self.form.set(field, value);
        self.mark_dirty();
    }

    pub(crate) fn set_form_flag(&mut self, flag: FormFlag, checked: bool) {
        self.form.set_flag(flag, checked);
        self.mark_dirty();
    }

    pub(crate) fn reset_form(&mut self) {
        self.form.reset();
        self.mark_dirty();
    }

    pub(crate) fn set_contact_kind(&mut self, kind: ContactKind) {
        self.contact_kind = kind;
        self.mark_dirty();
    }

    /// Enters the pending state and snapshots the form for sending.
    pub(crate) fn begin_send(&mut self, timestamp: String) -> (RequestId, ContactSubmission) {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.pending_send = Some(PendingSend {
            request_id,
            name: self.form.name.clone(),
        });
        self.mark_dirty();
        (request_id, self.form.to_submission(timestamp))
    }

    /// Leaves the pending state if `request_id` is the send in flight.
    pub(crate) fn finish_send(&mut self, request_id: RequestId) -> Option<PendingSend> {
        if self
            .pending_send
            .as_ref()
            .is_some_and(|pending| pending.request_id == request_id)
        {
            self.mark_dirty();
            self.pending_send.take()
        } else {
            None
        }
    }

    /// Flips the story panel; returns whether it is now expanded.
    pub(crate) fn toggle_story(&mut self, effects: &mut Vec<Effect>) -> bool {
        self.story_expanded = !self.story_expanded;
        if self.story_expanded {
            let delay = self.config.timings.story_scroll_delay;
            self.timers.start(delay, TimerPurpose::ScrollToStory, effects);
        }
        self.mark_dirty();
        self.story_expanded
    }

    pub(crate) fn is_story_expanded(&self) -> bool {
        self.story_expanded
    }

    /// Arms the load-time timers. Only the first load counts.
    pub(crate) fn load(&mut self, effects: &mut Vec<Effect>) -> bool {
        if self.loaded {
            return false;
        }
        self.loaded = true;
        let delay = self.config.timings.load_delay;
        self.timers.start(delay, TimerPurpose::ShowWelcome, effects);
        self.timers.start(delay, TimerPurpose::StartCardReveal, effects);
        true
    }

    pub(crate) fn show_body(&mut self) {
        self.body_visible = true;
        self.mark_dirty();
    }

    pub(crate) fn schedule_card_reveals(&mut self, effects: &mut Vec<Effect>) {
        let stagger = self.config.timings.card_stagger;
        for index in 0..self.cards_revealed.len() {
            let after = stagger.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX));
            self.timers.start(after, TimerPurpose::RevealCard(index), effects);
        }
    }

    pub(crate) fn reveal_card(&mut self, index: usize) -> bool {
        match self.cards_revealed.get_mut(index) {
            Some(revealed) if !*revealed => {
                *revealed = true;
                self.mark_dirty();
                true
            }
            _ => false,
        }
    }
}
