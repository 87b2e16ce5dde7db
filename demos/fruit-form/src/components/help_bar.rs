use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_select::{format_key_for_display, BindingAction, Keybindings};
use tui_select_widget::DropdownKey;

use super::Component;
use crate::action::Action;
use crate::config::FormKey;

pub struct HelpBar;

pub struct HelpBarProps<'a> {
    pub form: &'a Keybindings<FormKey>,
    pub dropdown: &'a Keybindings<DropdownKey>,
    /// Show the retry hint
    pub can_retry: bool,
}

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut entries = Vec::new();
        // A failed load leaves no dropdown on screen, only the retry
        if props.can_retry {
            entries.push((join_keys(props.form, &[FormKey::Retry]), "retry"));
        } else {
            entries.push((
                join_keys(
                    props.dropdown,
                    &[DropdownKey::NavigatePrevious, DropdownKey::NavigateNext],
                ),
                "move",
            ));
            entries.push((join_keys(props.dropdown, &[DropdownKey::Commit]), "choose"));
            entries.push((join_keys(props.dropdown, &[DropdownKey::Close]), "close"));
        }
        entries.push((join_keys(props.form, &[FormKey::FocusNext]), "next field"));
        entries.push((join_keys(props.form, &[FormKey::Quit]), "quit"));

        let spans: Vec<Span> = entries
            .into_iter()
            .filter(|(keys, _)| !keys.is_empty())
            .flat_map(|(keys, label)| {
                [
                    Span::styled(format!(" {keys}"), Style::default().fg(Color::Cyan).bold()),
                    Span::styled(format!(" {label} "), Style::default().fg(Color::DarkGray)),
                ]
            })
            .collect();

        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}

/// First bound key of each action, formatted for display
fn join_keys<K: BindingAction>(bindings: &Keybindings<K>, actions: &[K]) -> String {
    actions
        .iter()
        .filter_map(|action| bindings.first_key(*action))
        .map(format_key_for_display)
        .collect::<Vec<_>>()
        .join("")
}
