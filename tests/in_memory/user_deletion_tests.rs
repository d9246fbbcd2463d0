//! Cascading user removal through the deletion service.

use std::sync::Arc;

use super::helpers::{registry, repo, runtime, seed, user};
use rstest::rstest;
use taskdesk::{
    task::{adapters::memory::InMemoryTaskRepository, domain::TaskStatus, ports::TaskRepository},
    user::services::UserDeletionService,
};
use tokio::runtime::Runtime;

#[rstest]
fn deleting_a_user_removes_their_tasks_only(runtime: Runtime, repo: InMemoryTaskRepository) {
    let users = registry(&repo, &[7, 8]);
    seed(&runtime, &repo, 7, "Buy milk", TaskStatus::Pending);
    seed(&runtime, &repo, 7, "Walk dog", TaskStatus::Done);
    let kept = seed(&runtime, &repo, 8, "Read", TaskStatus::Pending);
    let service = UserDeletionService::new(Arc::new(users.clone()));

    let outcome = runtime
        .block_on(service.delete(user(7)))
        .expect("deletion should succeed");

    assert_eq!(outcome.user_id, user(7));
    assert_eq!(outcome.tasks_removed, 2);
    assert!(outcome.user_removed);
    assert!(!users.contains(user(7)).expect("registry lookup"));
    let remaining = runtime
        .block_on(repo.list_all())
        .expect("listing should succeed");
    assert_eq!(remaining, vec![kept]);
}

#[rstest]
fn deleting_twice_reports_nothing_the_second_time(
    runtime: Runtime,
    repo: InMemoryTaskRepository,
) {
    let users = registry(&repo, &[7]);
    seed(&runtime, &repo, 7, "Buy milk", TaskStatus::Pending);
    let service = UserDeletionService::new(Arc::new(users));

    runtime
        .block_on(service.delete(user(7)))
        .expect("first deletion should succeed");
    let second = runtime
        .block_on(service.delete(user(7)))
        .expect("second deletion should succeed");

    assert_eq!(second.tasks_removed, 0);
    assert!(!second.user_removed);
}
