use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use todoterm::constants::NEW_TASK_PLACEHOLDER;
use todoterm::controller::{Controller, FocusTarget, Task};
use todoterm::icons::IconService;
use todoterm::logger::Logger;
use todoterm::ui::components::{DialogComponent, InputComponent, TaskListComponent};
use todoterm::ui::core::{Action, Component, DialogType};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn draw(component: &mut impl Component, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| component.render(f, Rect::new(0, 0, width, height)))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn list_for(controller: &Controller) -> TaskListComponent {
    let mut list = TaskListComponent::new();
    list.update_data(&controller.render_model(), IconService::default());
    list
}

#[test]
fn test_task_list_empty_has_no_selection() {
    let mut list = list_for(&Controller::default());
    assert_eq!(list.selected_task_id(), None);
    assert_eq!(list.handle_key_events(key(KeyCode::Char(' '))), Action::None);
    list.select_next();
    assert_eq!(list.selected_task_id(), None);
}

#[test]
fn test_task_list_keeps_selection_by_id() {
    let mut controller = Controller::default().with_tasks(vec![Task::new(1, "one", false), Task::new(2, "two", false)]);
    let mut list = list_for(&controller);
    list.select_next();
    assert_eq!(list.selected_task_id(), Some(2));

    // A task prepended above the cursor must not move it
    controller = Controller::default().with_tasks(vec![
        Task::new(3, "three", false),
        Task::new(1, "one", false),
        Task::new(2, "two", false),
    ]);
    list.update_data(&controller.render_model(), IconService::default());
    assert_eq!(list.selected_task_id(), Some(2));
}

#[test]
fn test_task_list_follows_edit_focus() {
    let mut controller = Controller::default().with_tasks(vec![Task::new(1, "one", false), Task::new(2, "two", false)]);
    let mut list = list_for(&controller);
    assert_eq!(list.selected_task_id(), Some(1));

    controller.edit_task(2);
    assert_eq!(controller.render_model().focus, FocusTarget::EditInput(2));
    list.update_data(&controller.render_model(), IconService::default());
    assert_eq!(list.selected_task_id(), Some(2));
}

#[test]
fn test_task_list_consumes_navigation() {
    let controller = Controller::default().with_tasks(vec![Task::new(1, "one", false), Task::new(2, "two", false)]);
    let mut list = list_for(&controller);

    assert_eq!(list.update(Action::NextTask), Action::None);
    assert_eq!(list.selected_task_id(), Some(2));
    assert_eq!(list.update(Action::PreviousTask), Action::None);
    assert_eq!(list.selected_task_id(), Some(1));
    assert_eq!(list.update(Action::Reload), Action::Reload);
}

#[test]
fn test_input_component_keys() {
    let mut input = InputComponent::new();
    input.update_data("draft", true, IconService::default());
    assert!(input.is_focused());

    assert_eq!(input.handle_key_events(key(KeyCode::Char('x'))), Action::InputChar('x'));
    assert_eq!(input.handle_key_events(key(KeyCode::Backspace)), Action::InputBackspace);
    assert_eq!(input.handle_key_events(key(KeyCode::Enter)), Action::SubmitNewTask);
    assert_eq!(input.handle_key_events(key(KeyCode::Esc)), Action::BlurInput);
    assert_eq!(
        input.handle_events(Some(Event::Key(key(KeyCode::Enter)))),
        Action::SubmitNewTask
    );
    assert_eq!(input.handle_events(None), Action::None);
}

#[test]
fn test_dialog_component_visibility() {
    let mut dialog = DialogComponent::new(Logger::new(), IconService::default());
    assert!(!dialog.is_visible());

    assert_eq!(dialog.update(Action::ShowDialog(DialogType::Logs)), Action::None);
    assert!(dialog.is_visible());
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('G'))), Action::HideDialog);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::None);

    dialog.update(Action::HideDialog);
    assert!(!dialog.is_visible());
    assert_eq!(dialog.update(Action::Quit), Action::Quit);
}

#[test]
fn test_dialog_component_delete_prompt() {
    let mut controller = Controller::default().with_tasks(vec![Task::new(1, "one", false)]);
    controller.request_delete(1);

    let mut dialog = DialogComponent::new(Logger::new(), IconService::default());
    dialog.update_data(controller.render_model().pending_delete, IconService::default());

    assert!(dialog.is_confirming_delete());
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('Y'))), Action::ResolveDelete(true));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::ResolveDelete(false));
}

#[test]
fn test_input_component_rendering() {
    let mut input = InputComponent::new();
    input.update_data("", false, IconService::default());
    assert!(draw(&mut input, 60, 3).contains(NEW_TASK_PLACEHOLDER));

    input.update_data("Call mom", true, IconService::default());
    let screen = draw(&mut input, 60, 3);
    assert!(screen.contains("Call mom▏"));
    assert!(screen.contains("New task"));
    assert!(!screen.contains(NEW_TASK_PLACEHOLDER));
}

#[test]
fn test_task_rows_show_staged_title() {
    let mut controller = Controller::default().with_tasks(vec![Task::new(1, "one", false), Task::new(2, "two", false)]);
    controller.edit_task(2);
    controller.set_staged_title("two, renamed");

    let mut list = list_for(&controller);
    let screen = draw(&mut list, 60, 6);
    assert!(screen.contains("two, renamed█"));

    controller.save_edit(2).unwrap();
    list.update_data(&controller.render_model(), IconService::default());
    let screen = draw(&mut list, 60, 6);
    assert!(screen.contains("two, renamed"));
    assert!(screen.contains("Saving..."));
}
