//! When steps for descriptor discovery BDD scenarios.

use super::world::DescriptorWorld;
use rstest_bdd_macros::when;

#[when("the descriptor is registered")]
fn register_descriptor(world: &mut DescriptorWorld) {
    world.last_register_result = Some(world.service.register(world.config.clone()));
}
