//! Event flow through the form, checked with TestHarness

use fruit_form::{
    action::Action,
    components::{Component, FormView, FormViewProps},
    config::{KeyConfig, DEFAULT_LABEL},
    effect::Effect,
    reducer::reducer,
    state::{Field, FormState},
};
use tui_select::testing::*;
use tui_select::{assert_emitted, assert_not_emitted, EventKind};
use tui_select_widget::{OptionList, SelectOption};

fn fruits() -> OptionList {
    OptionList::new(vec![
        SelectOption::new(0, "banana"),
        SelectOption::new(1, "cherry"),
        SelectOption::new(2, "orange"),
        SelectOption::new(3, "strawberry"),
    ])
    .unwrap()
}

fn harness() -> TestHarness<FormState, Action> {
    TestHarness::new(FormState {
        options: Some(fruits()),
        ..Default::default()
    })
}

/// Feed one event to the view and run the emitted actions through the reducer
fn send(
    view: &mut FormView,
    harness: &mut TestHarness<FormState, Action>,
    event: EventKind,
) -> (Vec<Action>, Vec<Effect>) {
    harness.emit_all(view.handle_event(&event, FormViewProps { state: &harness.state }));
    let actions = harness.drain_emitted();
    let mut effects = Vec::new();
    for action in &actions {
        effects.extend(reducer(&mut harness.state, action.clone()).effects);
    }
    (actions, effects)
}

fn press(
    view: &mut FormView,
    harness: &mut TestHarness<FormState, Action>,
    sequence: &str,
) -> (Vec<Action>, Vec<Effect>) {
    let mut all = (Vec::new(), Vec::new());
    for k in keys(sequence) {
        let (actions, effects) = send(view, harness, EventKind::Key(k));
        all.0.extend(actions);
        all.1.extend(effects);
    }
    all
}

fn draw(view: &mut FormView, harness: &TestHarness<FormState, Action>) {
    let mut render = RenderHarness::new(60, 20);
    render.render(|frame| {
        let area = frame.area();
        view.render(frame, area, FormViewProps { state: &harness.state });
    });
}

#[test]
fn test_keyboard_choice_then_submit() {
    let mut view = FormView::new(DEFAULT_LABEL, KeyConfig::default());
    let mut harness = harness();

    let (actions, _) = press(&mut view, &mut harness, "down down down enter");
    assert!(actions.is_empty(), "Dropdown keys stay inside the widget");
    assert_eq!(view.dropdown().value(), "cherry");
    assert!(view.dropdown().is_open());

    let (actions, _) = press(&mut view, &mut harness, "tab");
    assert_emitted!(actions, Action::FormFocusNext);
    assert!(!view.dropdown().is_open(), "Leaving the field blurs the dropdown");
    assert_eq!(harness.state.focus, Field::Submit);

    let (actions, effects) = press(&mut view, &mut harness, "enter");
    assert_emitted!(actions, Action::FormSubmit(Some(v)) if v == "cherry");
    assert_eq!(effects, vec![Effect::Announce("Enjoy your cherry!".into())]);
}

#[test]
fn test_submit_without_choice() {
    let mut view = FormView::new(DEFAULT_LABEL, KeyConfig::default());
    let mut harness = harness();

    press(&mut view, &mut harness, "tab");
    let (actions, effects) = press(&mut view, &mut harness, "space");
    assert_emitted!(actions, Action::FormSubmit(None));
    assert_eq!(effects, vec![Effect::Announce("Nothing chosen yet".into())]);
}

#[test]
fn test_enter_on_dropdown_does_not_submit() {
    let mut view = FormView::new(DEFAULT_LABEL, KeyConfig::default());
    let mut harness = harness();

    let (actions, _) = press(&mut view, &mut harness, "down enter");
    assert_not_emitted!(actions, Action::FormSubmit(_));
    assert_eq!(view.dropdown().value(), DEFAULT_LABEL, "No row was focused");
    assert!(view.dropdown().is_open());
}

#[test]
fn test_pointer_flow() {
    let mut view = FormView::new(DEFAULT_LABEL, KeyConfig::default());
    let mut harness = harness();
    draw(&mut view, &harness);

    // Toggle sits at (14, 4) with size 32x3
    send(&mut view, &mut harness, EventKind::Mouse(mouse_down(20, 5)));
    assert!(view.dropdown().is_open());
    draw(&mut view, &harness);

    // Popup border at row 7, banana at 8, cherry at 9
    let (actions, _) = send(&mut view, &mut harness, EventKind::Mouse(mouse_down(20, 9)));
    assert!(actions.is_empty());
    assert!(!view.dropdown().is_open());
    assert_eq!(view.dropdown().value(), "cherry");
    draw(&mut view, &harness);

    // Submit button centered below the field, rows 8..11
    let (actions, effects) = send(&mut view, &mut harness, EventKind::Mouse(mouse_down(29, 9)));
    assert_eq!(
        actions,
        vec![
            Action::FormFocus(Field::Submit),
            Action::FormSubmit(Some("cherry".into()))
        ]
    );
    assert_eq!(effects, vec![Effect::Announce("Enjoy your cherry!".into())]);
    assert_eq!(harness.state.focus, Field::Submit);
}

#[test]
fn test_click_on_toggle_focuses_the_field() {
    let mut view = FormView::new(DEFAULT_LABEL, KeyConfig::default());
    let mut harness = harness();
    harness.state.focus = Field::Submit;
    draw(&mut view, &harness);

    let (actions, _) = send(&mut view, &mut harness, EventKind::Mouse(mouse_down(20, 5)));
    assert_eq!(actions, vec![Action::FormFocus(Field::Fruit)]);
    assert!(view.dropdown().is_open());
    assert_eq!(harness.state.focus, Field::Fruit);
}

#[test]
fn test_popup_row_over_submit_wins() {
    let mut view = FormView::new(DEFAULT_LABEL, KeyConfig::default());
    let mut harness = harness();
    press(&mut view, &mut harness, "down");
    draw(&mut view, &harness);

    // Row 9 is both "cherry" and the submit button's middle row
    let (actions, _) = send(&mut view, &mut harness, EventKind::Mouse(mouse_down(29, 9)));
    assert_not_emitted!(actions, Action::FormSubmit(_));
    assert_eq!(view.dropdown().value(), "cherry");
}

#[test]
fn test_terminal_blur_closes_dropdown() {
    let mut view = FormView::new(DEFAULT_LABEL, KeyConfig::default());
    let mut harness = harness();
    press(&mut view, &mut harness, "down down");
    assert!(view.dropdown().is_open());

    send(&mut view, &mut harness, EventKind::FocusLost);
    assert!(!view.dropdown().is_open());
    assert_eq!(view.dropdown().state().focus_index(), None);
}

#[test]
fn test_placeholder_ignores_dropdown_keys() {
    let mut view = FormView::new(DEFAULT_LABEL, KeyConfig::default());
    let mut harness = TestHarness::<FormState, Action>::new(FormState {
        is_loading: true,
        ..Default::default()
    });

    let (actions, _) = press(&mut view, &mut harness, "down enter");
    assert!(actions.is_empty());
    assert!(!view.dropdown().is_open());
}

#[test]
fn test_retry_only_after_error() {
    let mut view = FormView::new(DEFAULT_LABEL, KeyConfig::default());
    let mut harness = TestHarness::<FormState, Action>::default();

    let (actions, _) = press(&mut view, &mut harness, "r");
    assert!(actions.is_empty());

    harness.state.error = Some("file not found".into());
    let (actions, effects) = press(&mut view, &mut harness, "r");
    assert_eq!(actions, vec![Action::OptionsFetch]);
    assert_eq!(effects, vec![Effect::LoadOptions]);
    assert!(harness.state.is_loading);
}

#[test]
fn test_quit() {
    let mut view = FormView::new(DEFAULT_LABEL, KeyConfig::default());
    let mut harness = harness();

    let (actions, _) = press(&mut view, &mut harness, "q");
    assert_eq!(actions, vec![Action::Quit]);
}

#[test]
fn test_resize_only_redraws() {
    let mut view = FormView::new(DEFAULT_LABEL, KeyConfig::default());
    let mut harness = harness();
    press(&mut view, &mut harness, "down down");
    let before = harness.state.clone();

    // The next frame lays out against the new size; nothing goes through the store
    let (actions, effects) = send(&mut view, &mut harness, EventKind::Resize(100, 30));
    assert!(actions.is_empty());
    assert!(effects.is_empty());
    assert_eq!(harness.state, before);
    assert!(view.dropdown().is_open(), "Resize leaves the dropdown alone");
}

#[test]
fn test_category_drain() {
    let mut harness = TestHarness::<FormState, Action>::default();
    harness.emit(Action::OptionsFetch);
    harness.emit(Action::FormFocusNext);
    harness.emit(Action::Quit);

    assert_eq!(harness.drain_category("form"), vec![Action::FormFocusNext]);
    assert_eq!(
        harness.drain_emitted(),
        vec![Action::OptionsFetch, Action::Quit]
    );
}
