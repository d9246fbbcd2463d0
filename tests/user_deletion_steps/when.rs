//! When steps for user deletion BDD scenarios.

use super::world::{UserDeletionWorld, run_async, user_id};
use rstest_bdd_macros::when;

#[when("user {user:u64} is deleted")]
fn user_is_deleted(world: &mut UserDeletionWorld, user: u64) -> Result<(), eyre::Report> {
    let target = user_id(user)?;
    world.last_deletion = Some(run_async(world.service.delete(target)));
    Ok(())
}
