mod common;

use common::{remote, MockBackend};
use std::sync::Arc;
use std::time::Duration;
use todoterm::backend::{Backend, BackendError, TaskPayload};
use todoterm::controller::{Command, Completion, Controller};
use todoterm::ui::core::{Action, TaskManager};
use tokio::time::timeout;

async fn next_completion(rx: &mut tokio::sync::mpsc::UnboundedReceiver<Action>) -> Completion {
    match timeout(Duration::from_secs(5), rx.recv()).await {
        Ok(Some(Action::CommandCompleted(completion))) => completion,
        other => panic!("expected a completion, got {:?}", other),
    }
}

#[tokio::test]
async fn test_load_command_reports_tasks() {
    let backend = Arc::new(MockBackend::with_tasks(vec![
        remote(1, "a", false),
        remote(2, "b", true),
        remote(3, "c", false),
    ]));
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_command(Command::Load { limit: 2 }, backend.clone());
    assert_eq!(manager.job_count(), 1);

    let completion = next_completion(&mut rx).await;
    match completion {
        Completion::Loaded(Ok(tasks)) => assert_eq!(tasks.len(), 2),
        other => panic!("unexpected completion: {:?}", other),
    }
    assert_eq!(backend.calls(), vec!["fetch 2".to_string()]);
}

#[tokio::test]
async fn test_save_command_sends_title_and_flag() {
    let backend = Arc::new(MockBackend::default());
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_command(
        Command::SaveTitle {
            id: 4,
            title: "renamed".to_string(),
            completed: true,
        },
        backend.clone(),
    );

    let completion = next_completion(&mut rx).await;
    assert!(matches!(completion, Completion::TitleSaved { id: 4, result: Ok(()), .. }));
    assert_eq!(
        backend.payloads.lock().unwrap().clone(),
        vec![TaskPayload {
            user_id: 1,
            title: "renamed".to_string(),
            completed: true,
        }]
    );
}

#[tokio::test]
async fn test_failures_are_carried_in_completion() {
    let backend = Arc::new(MockBackend::failing(BackendError::Http(500)));
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_command(Command::Delete { id: 9 }, backend);

    let completion = next_completion(&mut rx).await;
    assert!(!completion.is_success());
    assert_eq!(completion.error(), Some(&BackendError::Http(500)));
}

#[tokio::test]
async fn test_finished_jobs_are_cleaned_up() {
    let backend: Arc<dyn Backend> = Arc::new(MockBackend::default());
    let (mut manager, mut rx) = TaskManager::new();

    let first = manager.spawn_command(Command::Delete { id: 1 }, backend.clone());
    let second = manager.spawn_command(Command::Delete { id: 2 }, backend);
    assert_ne!(first, second);

    next_completion(&mut rx).await;
    next_completion(&mut rx).await;
    // Give the spawned tasks a moment to be marked finished
    tokio::time::sleep(Duration::from_millis(50)).await;

    let mut finished = manager.cleanup_finished_jobs();
    finished.sort();
    assert_eq!(finished, vec![first, second]);
    assert_eq!(manager.job_count(), 0);
}

#[tokio::test]
async fn test_controller_round_trip_through_manager() {
    let backend = Arc::new(MockBackend::with_tasks(vec![remote(7, "seeded", false)]));
    let (mut manager, mut rx) = TaskManager::new();
    let mut controller = Controller::default();

    manager.spawn_command(controller.load(), backend.clone());
    controller.apply(next_completion(&mut rx).await);
    assert_eq!(controller.next_task_id(), 8);

    let command = controller.toggle_complete(7).unwrap();
    manager.spawn_command(command, backend.clone());
    controller.apply(next_completion(&mut rx).await);
    assert!(controller.task(7).unwrap().completed);

    let command = controller.create("fresh").unwrap();
    manager.spawn_command(command, backend);
    controller.apply(next_completion(&mut rx).await);
    assert_eq!(controller.tasks()[0].id, 8);
    assert_eq!(controller.tasks()[0].title, "fresh");
}
