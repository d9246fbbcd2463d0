//! Given steps for user deletion BDD scenarios.

use super::world::{UserDeletionWorld, run_async, user_id};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use taskdesk::task::{
    domain::{NewTask, TaskStatus},
    ports::TaskRepository,
};

#[given("a registered user {user:u64}")]
fn registered_user(world: &mut UserDeletionWorld, user: u64) -> Result<(), eyre::Report> {
    world
        .users
        .register(user_id(user)?)
        .wrap_err("register scenario user")?;
    Ok(())
}

#[given(r#"user {user:u64} owns a task named "{name}""#)]
fn user_owns_task(
    world: &mut UserDeletionWorld,
    user: u64,
    name: String,
) -> Result<(), eyre::Report> {
    let new_task = NewTask::new(name, "", TaskStatus::Pending, user_id(user)?, &DefaultClock)
        .wrap_err("build scenario task")?;
    run_async(world.tasks.create(&new_task)).wrap_err("store scenario task")?;
    Ok(())
}
