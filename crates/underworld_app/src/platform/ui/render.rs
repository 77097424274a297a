use underworld_core::{AppViewModel, FormField, HelpView, NotificationView};

use super::constants::{Slot, Target, SUBMIT_PENDING_LABEL};
use super::surface::SurfaceCommand;

const FIELDS: [FormField; 8] = [
    FormField::Name,
    FormField::Email,
    FormField::Phone,
    FormField::Location,
    FormField::Service,
    FormField::Budget,
    FormField::Timeline,
    FormField::Message,
];

/// Commands that bring a surface showing `prev` up to date with `next`.
/// With no `prev`, everything is rendered.
pub fn render(prev: Option<&AppViewModel>, next: &AppViewModel) -> Vec<SurfaceCommand> {
    let mut cmds = Vec::new();

    // Deactivate before activate so a surface never shows two active pages.
    let controls = next.controls.iter().map(|c| (Target::Control(c.page), c.active));
    let panels = next.panels.iter().map(|p| (Target::Panel(p.page), p.active));
    let targets: Vec<(Target, bool)> = controls.chain(panels).collect();
    let was_active = |target: Target| {
        prev.is_some_and(|prev| match target {
            Target::Control(page) => prev.controls.iter().any(|c| c.page == page && c.active),
            Target::Panel(page) => prev.panels.iter().any(|p| p.page == page && p.active),
        })
    };
    for &(target, active) in &targets {
        if !active && (prev.is_none() || was_active(target)) {
            cmds.push(SurfaceCommand::Deactivate(target));
        }
    }
    for &(target, active) in &targets {
        if active && !was_active(target) {
            cmds.push(SurfaceCommand::Activate(target));
        }
    }

    if changed(prev, next, |v| &v.breadcrumb) {
        cmds.push(SurfaceCommand::SetText(Slot::Breadcrumb, next.breadcrumb.clone()));
    }

    if changed(prev, next, |v| &v.notification) {
        match &next.notification {
            Some(toast) => {
                cmds.push(SurfaceCommand::SetText(Slot::Notification, toast_text(toast)));
                cmds.push(SurfaceCommand::Show(Slot::Notification));
            }
            None => cmds.push(SurfaceCommand::Hide(Slot::Notification)),
        }
    }

    if changed(prev, next, |v| &v.search_input) {
        cmds.push(SurfaceCommand::SetText(Slot::SearchInput, next.search_input.clone()));
    }
    if changed(prev, next, |v| &v.search_results) {
        if next.search_results.is_visible() {
            let rows = next.search_results.labels().join(" | ");
            cmds.push(SurfaceCommand::SetText(Slot::SearchResults, rows));
            cmds.push(SurfaceCommand::Show(Slot::SearchResults));
        } else {
            cmds.push(SurfaceCommand::Hide(Slot::SearchResults));
        }
    }

    if changed(prev, next, |v| &v.theme_icon) {
        cmds.push(SurfaceCommand::SetText(
            Slot::ThemeToggle,
            next.theme_icon.to_string(),
        ));
    }

    if changed(prev, next, |v| &v.help) {
        match next.help {
            HelpView::Shown => cmds.push(SurfaceCommand::Show(Slot::Help)),
            HelpView::Hidden => cmds.push(SurfaceCommand::Hide(Slot::Help)),
            // Still on screen while the fade-out runs.
            HelpView::FadingOut => {}
        }
    }

    render_form(prev, next, &mut cmds);

    if changed(prev, next, |v| &v.story) {
        let slot = Slot::StoryContent;
        cmds.push(if next.story.expanded {
            SurfaceCommand::Show(slot)
        } else {
            SurfaceCommand::Hide(slot)
        });
        cmds.push(SurfaceCommand::SetText(
            Slot::StoryButton,
            next.story.button_label.to_string(),
        ));
    }

    // Body and cards only ever appear; a fresh surface starts them hidden.
    if changed(prev, next, |v| &v.body_visible) {
        cmds.push(if next.body_visible {
            SurfaceCommand::Show(Slot::Body)
        } else {
            SurfaceCommand::Hide(Slot::Body)
        });
    }
    for (index, &revealed) in next.cards_revealed.iter().enumerate() {
        let was = prev.map(|prev| prev.cards_revealed.get(index) == Some(&true));
        match (was, revealed) {
            (None, false) => cmds.push(SurfaceCommand::Hide(Slot::Card(index))),
            (None | Some(false), true) => cmds.push(SurfaceCommand::Show(Slot::Card(index))),
            _ => {}
        }
    }

    cmds
}

fn render_form(prev: Option<&AppViewModel>, next: &AppViewModel, cmds: &mut Vec<SurfaceCommand>) {
    let form = &next.form;
    let prev_form = prev.map(|p| &p.form);

    for field in FIELDS {
        let value = field_value(&form.fields, field);
        if prev_form.map(|p| field_value(&p.fields, field)) != Some(value) {
            cmds.push(SurfaceCommand::SetText(Slot::Field(field), value.to_string()));
        }
    }
    for (name, checked, was) in [
        (
            "confidential",
            form.fields.confidential,
            prev_form.map(|p| p.fields.confidential),
        ),
        ("urgent", form.fields.urgent, prev_form.map(|p| p.fields.urgent)),
    ] {
        if was != Some(checked) {
            let text = if checked { "on" } else { "off" };
            cmds.push(SurfaceCommand::SetText(Slot::Checkbox(name), text.to_string()));
        }
    }

    if prev_form.map(|p| p.message_label) != Some(form.message_label) {
        cmds.push(SurfaceCommand::SetText(
            Slot::MessageLabel,
            form.message_label.to_string(),
        ));
        cmds.push(SurfaceCommand::SetText(
            Slot::MessagePlaceholder,
            form.message_placeholder.to_string(),
        ));
    }

    let submit_text = |pending: bool, label: &'static str| {
        if pending {
            SUBMIT_PENDING_LABEL
        } else {
            label
        }
    };
    let submit = submit_text(form.pending, form.submit_label);
    if prev_form.map(|p| submit_text(p.pending, p.submit_label)) != Some(submit) {
        cmds.push(SurfaceCommand::SetText(Slot::SubmitButton, submit.to_string()));
    }
}

fn field_value(fields: &underworld_core::ContactForm, field: FormField) -> &str {
    match field {
        FormField::Name => &fields.name,
        FormField::Email => &fields.email,
        FormField::Phone => &fields.phone,
        FormField::Location => &fields.location,
        FormField::Service => &fields.service,
        FormField::Budget => &fields.budget,
        FormField::Timeline => &fields.timeline,
        FormField::Message => &fields.message,
    }
}

fn toast_text(toast: &NotificationView) -> String {
    if toast.leaving {
        format!("{} {} (closing)", toast.icon, toast.message)
    } else {
        format!("{} {}", toast.icon, toast.message)
    }
}

fn changed<T: PartialEq>(
    prev: Option<&AppViewModel>,
    next: &AppViewModel,
    get: impl Fn(&AppViewModel) -> &T,
) -> bool {
    prev.map_or(true, |prev| get(prev) != get(next))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use underworld_core::{update, AppState, Effect, Msg, PageId, TimerPurpose};

    use super::*;
    use crate::platform::ui::surface::Surface;

    /// Keeps the set of active targets, as a real surface would.
    #[derive(Default)]
    struct RecordingSurface {
        active_controls: BTreeSet<PageId>,
        active_panels: BTreeSet<PageId>,
        breadcrumb: String,
        log: Vec<SurfaceCommand>,
    }

    impl Surface for RecordingSurface {
        fn apply(&mut self, command: SurfaceCommand) {
            match &command {
                SurfaceCommand::Activate(Target::Control(page)) => {
                    self.active_controls.insert(*page);
                }
                SurfaceCommand::Activate(Target::Panel(page)) => {
                    self.active_panels.insert(*page);
                }
                SurfaceCommand::Deactivate(Target::Control(page)) => {
                    self.active_controls.remove(page);
                }
                SurfaceCommand::Deactivate(Target::Panel(page)) => {
                    self.active_panels.remove(page);
                }
                SurfaceCommand::SetText(Slot::Breadcrumb, text) => {
                    self.breadcrumb = text.clone();
                }
                _ => {}
            }
            self.log.push(command);
        }
    }

    #[test]
    fn navigation_keeps_exactly_one_active_target_on_surface() {
        let mut surface = RecordingSurface::default();
        let state = AppState::new();
        let mut shown = state.view();
        surface.apply_all(render(None, &shown));

        let mut state = state;
        for page in ["about", "contact", "nowhere", "home"] {
            let (next, _) = update(
                state,
                Msg::NavClicked {
                    page: page.to_string(),
                },
            );
            state = next;
            let view = state.view();
            surface.apply_all(render(Some(&shown), &view));
            shown = view;

            let active = state.active_page();
            assert_eq!(surface.active_controls, BTreeSet::from([active]));
            assert_eq!(surface.active_panels, BTreeSet::from([active]));
            assert_eq!(surface.breadcrumb, active.title());
        }
    }

    #[test]
    fn first_render_hides_body_and_cards_until_load() {
        let state = AppState::new();
        let first = state.view();
        let cmds = render(None, &first);

        assert!(cmds.contains(&SurfaceCommand::Hide(Slot::Body)));
        for index in 0..first.cards_revealed.len() {
            assert!(cmds.contains(&SurfaceCommand::Hide(Slot::Card(index))));
        }

        let (state, effects) = update(state, Msg::PageLoaded);
        let welcome = effects
            .iter()
            .find_map(|effect| match effect {
                Effect::StartTimer { timer, .. }
                    if state.timer_purpose(*timer) == Some(TimerPurpose::ShowWelcome) =>
                {
                    Some(*timer)
                }
                _ => None,
            })
            .expect("welcome timer armed on load");
        let (state, _) = update(state, Msg::TimerElapsed { timer: welcome });
        let cmds = render(Some(&first), &state.view());
        assert!(cmds.contains(&SurfaceCommand::Show(Slot::Body)));
        assert!(!cmds.contains(&SurfaceCommand::Hide(Slot::Card(0))));
    }

    #[test]
    fn unchanged_view_renders_nothing() {
        let view = AppState::new().view();
        assert!(render(Some(&view), &view).is_empty());
    }

    #[test]
    fn search_surface_hides_and_shows() {
        let state = AppState::new();
        let before = state.view();
        let (state, _) = update(state, Msg::SearchInputChanged("zz-no-match".to_string()));
        let cmds = render(Some(&before), &state.view());

        assert!(cmds.contains(&SurfaceCommand::SetText(
            Slot::SearchResults,
            "No results found".to_string()
        )));
        assert!(cmds.contains(&SurfaceCommand::Show(Slot::SearchResults)));

        let shown = state.view();
        let (state, _) = update(state, Msg::SearchInputChanged("z".to_string()));
        let cmds = render(Some(&shown), &state.view());
        assert!(cmds.contains(&SurfaceCommand::Hide(Slot::SearchResults)));
    }

    #[test]
    fn pending_send_swaps_submit_label() {
        let mut state = AppState::new();
        for (field, value) in [
            (FormField::Name, "Kuzhi"),
            (FormField::Email, "k@example.com"),
            (FormField::Message, "Hire me"),
        ] {
            let (next, _) = update(
                state,
                Msg::FormFieldChanged {
                    field,
                    value: value.to_string(),
                },
            );
            state = next;
        }
        let before = state.view();
        let (state, _) = update(
            state,
            Msg::FormSubmitted {
                timestamp: String::new(),
            },
        );

        let cmds = render(Some(&before), &state.view());
        assert_eq!(
            cmds,
            vec![SurfaceCommand::SetText(
                Slot::SubmitButton,
                SUBMIT_PENDING_LABEL.to_string()
            )]
        );
    }
}
