//! Given steps for descriptor discovery BDD scenarios.

use super::world::DescriptorWorld;
use agent_descriptor::strategy_agent;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("the root agent configuration")]
fn root_agent_configuration(world: &mut DescriptorWorld) {
    world.config = world
        .config
        .clone()
        .with_name(strategy_agent::NAME)
        .with_model_reference(strategy_agent::MODEL)
        .with_description(strategy_agent::DESCRIPTION)
        .with_instruction(strategy_agent::INSTRUCTION);
}

#[given("the agent name is blank")]
fn agent_name_is_blank(world: &mut DescriptorWorld) {
    world.config = world.config.clone().with_name("");
}

#[given("the descriptor has already been registered")]
fn descriptor_already_registered(world: &mut DescriptorWorld) -> Result<(), eyre::Report> {
    world
        .service
        .register(world.config.clone())
        .wrap_err("register existing descriptor for duplicate scenario")?;
    Ok(())
}
