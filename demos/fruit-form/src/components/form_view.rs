//! The fruit form: heading, dropdown, submit button, status line
//!
//! Owns the dropdown instance. Form-level keys (Tab, submit, retry, quit) are
//! resolved first; everything else goes to the dropdown while it is shown.

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_select::{EventKind, Keybindings};
use tui_select_widget::{Dropdown, DropdownProps, OptionList};

use super::{Component, HelpBar, HelpBarProps};
use crate::action::Action;
use crate::config::{FormKey, KeyConfig};
use crate::state::{Field, FormState};

/// Width of the centered form column
pub const FORM_WIDTH: u16 = 32;

const SUBMIT_LABEL: &str = "Submit!";
const PLACEHOLDER: &str = "Load data...";

pub struct FormViewProps<'a> {
    pub state: &'a FormState,
}

pub struct FormView {
    fruit: Dropdown,
    form_keys: Keybindings<FormKey>,
    help: HelpBar,
    /// Where the submit button was last drawn
    submit_area: Rect,
}

impl FormView {
    pub fn new(label: impl Into<String>, keys: KeyConfig) -> Self {
        Self {
            fruit: Dropdown::new(label).with_keybindings(keys.dropdown),
            form_keys: keys.form,
            help: HelpBar,
            submit_area: Rect::default(),
        }
    }

    pub fn dropdown(&self) -> &Dropdown {
        &self.fruit
    }

    /// What a submission reports: the committed value, if the user made one
    pub fn choice(&self) -> Option<String> {
        self.fruit
            .has_selection()
            .then(|| self.fruit.value().to_string())
    }

    fn handle_form_key(&mut self, key: FormKey, state: &FormState) -> Option<Action> {
        match key {
            FormKey::FocusNext => {
                self.fruit.blur();
                Some(Action::FormFocusNext)
            }
            FormKey::FocusPrev => {
                self.fruit.blur();
                Some(Action::FormFocusPrev)
            }
            FormKey::Submit if state.focus == Field::Submit => {
                Some(Action::FormSubmit(self.choice()))
            }
            FormKey::Retry if state.error.is_some() && !state.is_loading => {
                Some(Action::OptionsFetch)
            }
            FormKey::Quit => Some(Action::Quit),
            // Not for the form right now; the dropdown may want it
            _ => None,
        }
    }

    fn render_placeholder(&self, frame: &mut Frame, area: Rect, state: &FormState) {
        let (text, style) = match &state.error {
            Some(error) => (format!("⚠ {error}"), Style::default().fg(Color::Red)),
            None => (PLACEHOLDER.to_string(), Style::default().fg(Color::DarkGray)),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(Line::styled(text, style)).block(block), area);
    }

    fn render_submit(&mut self, frame: &mut Frame, area: Rect, is_focused: bool) {
        let width = (SUBMIT_LABEL.len() as u16 + 4).min(area.width);
        let [button] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        self.submit_area = button;

        let (border, label) = if is_focused {
            (
                Style::default().fg(Color::Cyan),
                Style::default().add_modifier(Modifier::BOLD),
            )
        } else {
            (Style::default().fg(Color::DarkGray), Style::default())
        };
        let block = Block::default().borders(Borders::ALL).border_style(border);
        frame.render_widget(
            Paragraph::new(Line::styled(SUBMIT_LABEL, label))
                .alignment(Alignment::Center)
                .block(block),
            button,
        );
    }
}

impl Component<Action> for FormView {
    type Props<'a> = FormViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let state = props.state;
        let mut actions = Vec::new();

        if let EventKind::Key(key) = event {
            if let Some(action) = self
                .form_keys
                .resolve(key)
                .and_then(|form_key| self.handle_form_key(form_key, state))
            {
                actions.push(action);
                return actions;
            }
        }

        if let Some((column, row)) = event.left_press() {
            // The open popup is drawn over the button and wins the press
            let on_dropdown = self.fruit.contains(column, row);
            if !on_dropdown && self.submit_area.contains(Position::new(column, row)) {
                self.fruit.blur();
                if state.focus != Field::Submit {
                    actions.push(Action::FormFocus(Field::Submit));
                }
                actions.push(Action::FormSubmit(self.choice()));
                return actions;
            }
            if on_dropdown && state.focus != Field::Fruit {
                actions.push(Action::FormFocus(Field::Fruit));
            }
        }

        if let Some(options) = state.visible_options() {
            actions.extend(
                self.fruit
                    .handle_event(event, dropdown_props(options, state.focus)),
            );
        }
        actions
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;

        let outer_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(" Fruit Form ")
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);
        frame.render_widget(outer_block.clone(), area);
        let inner = outer_block.inner(area);

        let [body, help_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(FORM_WIDTH),
            Constraint::Fill(1),
        ])
        .areas(body);
        let [_, heading, _, field, _, submit, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(column);

        frame.render_widget(
            Paragraph::new(Line::styled(
                "Pick your fruit",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            heading,
        );

        self.render_submit(frame, submit, state.focus == Field::Submit);

        let status_line = if state.is_loading {
            Line::styled("Loading fruits...", Style::default().fg(Color::DarkGray))
        } else if state.error.is_some() {
            Line::styled("Could not load the fruits", Style::default().fg(Color::Red))
        } else if let Some(message) = &state.last_submission {
            Line::styled(message.as_str(), Style::default().fg(Color::Green))
        } else {
            Line::default()
        };
        frame.render_widget(Paragraph::new(status_line), status);

        self.help.render(
            frame,
            help_area,
            HelpBarProps {
                form: &self.form_keys,
                dropdown: self.fruit.keybindings(),
                can_retry: state.error.is_some(),
            },
        );

        // Last, so the open popup covers what lies below the field
        match state.visible_options() {
            Some(options) => {
                self.fruit
                    .render(frame, field, dropdown_props(options, state.focus));
            }
            None => self.render_placeholder(frame, field, state),
        }
    }
}

fn dropdown_props(options: &OptionList, focus: Field) -> DropdownProps<'_, Action> {
    DropdownProps {
        options,
        is_focused: focus == Field::Fruit,
        on_commit: None,
    }
}
