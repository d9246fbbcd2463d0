//! Search behaviour of the in-memory task repository.

use super::helpers::{repo, runtime, seed, user};
use rstest::rstest;
use taskdesk::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskSearch, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use tokio::runtime::Runtime;

#[rstest]
#[case::pending(Some(0), &["Buy milk"])]
#[case::done(Some(1), &["Spilt milk"])]
#[case::unrecognised(Some(7), &["Buy milk", "Spilt milk"])]
#[case::unfiltered(None, &["Buy milk", "Spilt milk"])]
fn status_code_narrows_results(
    runtime: Runtime,
    repo: InMemoryTaskRepository,
    #[case] status_code: Option<i16>,
    #[case] expected: &[&str],
) {
    seed(&runtime, &repo, 7, "Buy milk", TaskStatus::Pending);
    seed(&runtime, &repo, 7, "Spilt milk", TaskStatus::Done);
    seed(&runtime, &repo, 7, "Walk dog", TaskStatus::Done);

    let found = runtime
        .block_on(repo.search(&TaskSearch::new("milk", user(7)).with_status_code(status_code)))
        .expect("search should succeed");

    let names: Vec<&str> = found.iter().map(|task| task.name()).collect();
    assert_eq!(names, expected);
}

#[rstest]
fn wildcard_characters_match_literally(runtime: Runtime, repo: InMemoryTaskRepository) {
    seed(&runtime, &repo, 7, "50% off", TaskStatus::Pending);
    seed(&runtime, &repo, 7, "500 off", TaskStatus::Pending);

    let found = runtime
        .block_on(repo.search(&TaskSearch::new("0%", user(7))))
        .expect("search should succeed");

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name(), "50% off");
}

#[rstest]
fn other_users_tasks_do_not_satisfy_a_search(runtime: Runtime, repo: InMemoryTaskRepository) {
    seed(&runtime, &repo, 8, "Buy milk", TaskStatus::Pending);

    let result = runtime.block_on(repo.search(&TaskSearch::new("milk", user(7))));

    let Err(err) = result else {
        panic!("expected no-match error, got {result:?}");
    };
    assert!(matches!(err, TaskRepositoryError::NoSearchMatches { ref name } if name == "milk"));
    assert_eq!(err.status_code(), Some(404));
}
