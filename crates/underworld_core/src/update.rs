use site_logging::{site_debug, site_warn};

use crate::keyboard::shortcut_target;
use crate::{AppState, Effect, KeyPress, Msg, SendOutcome, Severity, TimerId, TimerPurpose};

const WELCOME_MESSAGE: &str = "Welcome to Kuzhi's Underworld! Click the ? button for help.";
const SEND_FAILED_MESSAGE: &str = "Error sending request. Please try again.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();
    match msg {
        Msg::PageLoaded => {
            state.load(&mut effects);
        }
        Msg::NavClicked { page } | Msg::QuickActionClicked { page } => {
            if state.navigate_to(&page, &mut effects).is_none() {
                site_debug!("ignoring navigation to unknown page {:?}", page);
            }
        }
        Msg::KeyPressed(press) => {
            key_pressed(&mut state, &press, &mut effects);
        }
        Msg::SearchInputChanged(input) => {
            state.set_search_input(input);
        }
        Msg::SearchResultSelected { index } => {
            if let Some(hit) = state.search_hit(index) {
                state.navigate_to(hit.page.as_str(), &mut effects);
                state.clear_search();
            }
        }
        Msg::NotificationCloseClicked => {
            state.dismiss_notification(&mut effects);
        }
        Msg::ThemeToggled => {
            let theme = state.toggle_theme();
            state.notify(
                format!("Switched to {} theme", theme.name()),
                Severity::Success,
                &mut effects,
            );
        }
        Msg::HelpOpened => {
            state.open_help(&mut effects);
        }
        Msg::HelpCloseClicked | Msg::HelpBackdropClicked => {
            state.close_help(&mut effects);
        }
        Msg::FormFieldChanged { field, value } => {
            state.set_form_field(field, value);
        }
        Msg::FormFlagChanged { flag, checked } => {
            state.set_form_flag(flag, checked);
        }
        Msg::ContactKindSelected(kind) => {
            state.set_contact_kind(kind);
        }
        Msg::FormSubmitted { timestamp } => {
            form_submitted(&mut state, timestamp, &mut effects);
        }
        Msg::FormCleared => {
            state.reset_form();
            state.notify("Form cleared!", Severity::Info, &mut effects);
        }
        Msg::ContactSendFinished {
            request_id,
            outcome,
        } => match state.finish_send(request_id) {
            Some(pending) => match outcome {
                SendOutcome::Delivered => {
                    state.reset_form();
                    state.notify(
                        format!(
                            "Thank you {}! Your hiring request has been sent to Kuzhi.",
                            pending.name
                        ),
                        Severity::Success,
                        &mut effects,
                    );
                }
                SendOutcome::Failed { reason } => {
                    site_warn!("contact request {} failed: {}", request_id, reason);
                    state.notify(SEND_FAILED_MESSAGE, Severity::Error, &mut effects);
                }
            },
            None => {
                site_debug!("ignoring completion for unknown request {}", request_id);
            }
        },
        Msg::StoryReadClicked { title } => {
            state.notify(
                format!("Opening \"{title}\" story..."),
                Severity::Info,
                &mut effects,
            );
        }
        Msg::StoryToggled => {
            state.toggle_story(&mut effects);
        }
        Msg::TimerElapsed { timer } => {
            timer_elapsed(&mut state, timer, &mut effects);
        }
    }

    (state, effects)
}

fn key_pressed(state: &mut AppState, press: &KeyPress, effects: &mut Vec<Effect>) {
    let router = state.router();
    let Some(index) = shortcut_target(press, router.controls().len(), router.active_index())
    else {
        return;
    };
    state.navigate_to_control(index, effects);
}

fn form_submitted(state: &mut AppState, timestamp: String, effects: &mut Vec<Effect>) {
    if state.is_send_pending() {
        site_debug!("submit ignored while a send is pending");
        return;
    }
    let missing = state.form().missing_required();
    if !missing.is_empty() {
        // No user-facing feedback here; the form is simply not sent.
        site_warn!("contact form not sent, missing required fields {:?}", missing);
        return;
    }
    let (request_id, submission) = state.begin_send(timestamp);
    effects.push(Effect::SendContactRequest {
        request_id,
        submission,
    });
}

fn timer_elapsed(state: &mut AppState, timer: TimerId, effects: &mut Vec<Effect>) {
    let Some(purpose) = state.take_timer(timer) else {
        site_debug!("timer {} no longer pending", timer);
        return;
    };
    match purpose {
        TimerPurpose::AutoDismiss(id) => {
            state.leave_notification(id, effects);
        }
        TimerPurpose::RemoveNotification(id) => {
            state.remove_notification(id);
        }
        TimerPurpose::CloseHelp => {
            state.finish_help_close(timer);
        }
        TimerPurpose::ShowWelcome => {
            state.show_body();
            state.notify(WELCOME_MESSAGE, Severity::Info, effects);
        }
        TimerPurpose::StartCardReveal => {
            state.schedule_card_reveals(effects);
        }
        TimerPurpose::RevealCard(index) => {
            state.reveal_card(index);
        }
        TimerPurpose::ScrollToStory => {
            if state.is_story_expanded() {
                effects.push(Effect::ScrollStoryIntoView);
            }
        }
    }
}
