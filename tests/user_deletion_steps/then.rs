//! Then steps for user deletion BDD scenarios.

use super::world::{UserDeletionWorld, run_async, user_id};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use taskdesk::task::ports::TaskRepository;

#[then("{count:u64} tasks are reported removed")]
fn tasks_reported_removed(world: &UserDeletionWorld, count: u64) -> Result<(), eyre::Report> {
    let outcome = world.deletion()?;
    if outcome.tasks_removed != count {
        return Err(eyre::eyre!(
            "expected {count} tasks removed, found {}",
            outcome.tasks_removed
        ));
    }
    Ok(())
}

#[then("the user record is reported removed")]
fn user_record_removed(world: &UserDeletionWorld) -> Result<(), eyre::Report> {
    let outcome = world.deletion()?;
    if !outcome.user_removed {
        return Err(eyre::eyre!("expected the user record to be removed"));
    }
    let still_registered = world
        .users
        .contains(outcome.user_id)
        .wrap_err("check user registry")?;
    if still_registered {
        return Err(eyre::eyre!("user {} is still registered", outcome.user_id));
    }
    Ok(())
}

#[then("the user record is reported missing")]
fn user_record_missing(world: &UserDeletionWorld) -> Result<(), eyre::Report> {
    let outcome = world.deletion()?;
    if outcome.user_removed {
        return Err(eyre::eyre!("expected no user record to be removed"));
    }
    Ok(())
}

#[then("user {user:u64} has no tasks")]
fn user_has_no_tasks(world: &UserDeletionWorld, user: u64) -> Result<(), eyre::Report> {
    let remaining =
        run_async(world.tasks.list_by_user(user_id(user)?)).wrap_err("list user tasks")?;
    if !remaining.is_empty() {
        return Err(eyre::eyre!(
            "expected no tasks for user {user}, found {}",
            remaining.len()
        ));
    }
    Ok(())
}

#[then("user {user:u64} still has {count:u64} task")]
fn user_still_has_tasks(
    world: &UserDeletionWorld,
    user: u64,
    count: u64,
) -> Result<(), eyre::Report> {
    let remaining =
        run_async(world.tasks.list_by_user(user_id(user)?)).wrap_err("list user tasks")?;
    let expected = usize::try_from(count).wrap_err("task count out of range")?;
    if remaining.len() != expected {
        return Err(eyre::eyre!(
            "expected {count} tasks for user {user}, found {}",
            remaining.len()
        ));
    }
    Ok(())
}
