use crate::common::{remote, MockBackend};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;
use std::time::{Duration, Instant};
use todoterm::constants::EMPTY_LIST_MESSAGE;
use todoterm::controller::{Controller, EditKey, FocusTarget, Task};
use todoterm::icons::IconService;
use todoterm::logger::Logger;
use todoterm::ui::core::{Action, DialogType};
use todoterm::ui::AppComponent;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn app_with(tasks: Vec<Task>) -> AppComponent {
    let controller = Controller::default().with_tasks(tasks);
    AppComponent::new(
        controller,
        Arc::new(MockBackend::default()),
        Logger::new(),
        IconService::default(),
    )
}

fn seeded_app() -> AppComponent {
    app_with(vec![Task::new(1, "Buy milk", false), Task::new(2, "Walk dog", true)])
}

fn press(app: &mut AppComponent, code: KeyCode) {
    let action = app.handle_key_events(key(code));
    app.handle_action(action);
}

fn screen(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

async fn drain(app: &mut AppComponent) {
    for _ in 0..50 {
        if app.active_job_count() == 0 {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
        app.process_background_actions();
        app.tick(Instant::now());
    }
}

#[tokio::test]
async fn test_list_key_mapping() {
    let mut app = seeded_app();

    assert_eq!(app.handle_key_events(key(KeyCode::Char('j'))), Action::NextTask);
    assert_eq!(app.handle_key_events(key(KeyCode::Up)), Action::PreviousTask);
    assert_eq!(app.handle_key_events(key(KeyCode::Char(' '))), Action::ToggleTask(1));
    assert_eq!(app.handle_key_events(key(KeyCode::Char('e'))), Action::EditTask(1));
    assert_eq!(app.handle_key_events(key(KeyCode::Enter)), Action::EditTask(1));
    assert_eq!(app.handle_key_events(key(KeyCode::Char('d'))), Action::RequestDelete(1));
    assert_eq!(app.handle_key_events(key(KeyCode::Char('a'))), Action::FocusInput);
    assert_eq!(app.handle_key_events(key(KeyCode::Char('r'))), Action::Reload);
    assert_eq!(
        app.handle_key_events(key(KeyCode::Char('?'))),
        Action::ShowDialog(DialogType::Help)
    );
    assert_eq!(app.handle_key_events(key(KeyCode::Char('q'))), Action::Quit);
    assert_eq!(
        app.handle_key_events(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Action::Quit
    );
}

#[tokio::test]
async fn test_selection_moves_and_wraps() {
    let mut app = seeded_app();

    press(&mut app, KeyCode::Down);
    assert_eq!(app.handle_key_events(key(KeyCode::Char(' '))), Action::ToggleTask(2));

    press(&mut app, KeyCode::Down);
    assert_eq!(app.handle_key_events(key(KeyCode::Char(' '))), Action::ToggleTask(1));

    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.handle_key_events(key(KeyCode::Char(' '))), Action::ToggleTask(2));
}

#[tokio::test]
async fn test_edit_mode_keys() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.render_model().focus, FocusTarget::EditInput(1));

    assert_eq!(app.handle_key_events(key(KeyCode::Char('q'))), Action::EditChar('q'));
    assert_eq!(
        app.handle_key_events(key(KeyCode::Enter)),
        Action::EditKey(1, EditKey::Activate)
    );
    assert_eq!(app.handle_key_events(key(KeyCode::Esc)), Action::EditKey(1, EditKey::Cancel));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.render_model().focus, FocusTarget::List);
    assert_eq!(app.controller().editing_task_id(), None);
}

#[tokio::test]
async fn test_edit_and_save_through_backend() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Char('!'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.controller().saving_task_id(), Some(1));

    drain(&mut app).await;

    assert_eq!(app.controller().task(1).unwrap().title, "Buy milk!");
    assert_eq!(app.controller().editing_task_id(), None);
}

#[tokio::test]
async fn test_new_task_input_flow() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.render_model().focus, FocusTarget::NewTaskInput);

    // Global shortcuts are plain text while typing
    assert_eq!(app.handle_key_events(key(KeyCode::Char('q'))), Action::InputChar('q'));

    for c in "Call mom".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    assert_eq!(app.render_model().new_task_input, "Call mom");

    press(&mut app, KeyCode::Enter);
    drain(&mut app).await;

    let first = &app.controller().tasks()[0];
    assert_eq!(first.id, 3);
    assert_eq!(first.title, "Call mom");
    assert_eq!(app.render_model().new_task_input, "");

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.render_model().focus, FocusTarget::List);
}

#[tokio::test]
async fn test_delete_prompt_keys() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('d'));
    assert!(app.render_model().pending_delete.is_some());
    assert!(screen(&mut app).contains("Buy milk"));

    // Prompt swallows list keys
    assert_eq!(app.handle_key_events(key(KeyCode::Char('j'))), Action::None);
    assert_eq!(app.handle_key_events(key(KeyCode::Char('y'))), Action::ResolveDelete(true));

    press(&mut app, KeyCode::Char('n'));
    assert!(app.render_model().pending_delete.is_none());
    assert_eq!(app.controller().tasks().len(), 2);

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Enter);
    drain(&mut app).await;
    assert!(app.controller().task(1).is_none());
}

#[tokio::test]
async fn test_help_dialog_toggles() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.handle_key_events(key(KeyCode::Char('j'))), Action::None);
    assert_eq!(app.handle_key_events(key(KeyCode::Esc)), Action::HideDialog);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.handle_key_events(key(KeyCode::Char('j'))), Action::NextTask);
}

#[tokio::test]
async fn test_quit_sets_flag() {
    let mut app = seeded_app();
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_initial_load_fills_list() {
    let backend = MockBackend::with_tasks(vec![remote(5, "remote one", false), remote(6, "remote two", true)]);
    let mut app = AppComponent::new(
        Controller::default(),
        Arc::new(backend),
        Logger::new(),
        IconService::default(),
    );

    app.trigger_initial_load();
    assert!(app.render_model().loading);
    drain(&mut app).await;

    let model = app.render_model();
    assert!(!model.loading);
    assert_eq!(model.items.len(), 2);
    assert_eq!(app.controller().next_task_id(), 7);
    assert!(screen(&mut app).contains("remote one"));
}

#[tokio::test]
async fn test_empty_list_message() {
    let mut app = app_with(Vec::new());
    assert!(screen(&mut app).contains(EMPTY_LIST_MESSAGE));
}
