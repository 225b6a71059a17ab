//! Then steps for descriptor discovery BDD scenarios.

use super::world::DescriptorWorld;
use agent_descriptor::descriptor::{
    domain::{AgentDescriptor, DescriptorField},
    ports::DescriptorRegistryError,
    services::DescriptorRegistryServiceError,
};
use rstest_bdd_macros::then;

fn last_result(
    world: &DescriptorWorld,
) -> Result<&Result<AgentDescriptor, DescriptorRegistryServiceError>, eyre::Report> {
    world
        .last_register_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result in scenario world"))
}

#[then(r#"the agent "{name}" can be discovered"#)]
fn agent_can_be_discovered(
    world: &mut DescriptorWorld,
    name: String,
) -> Result<(), eyre::Report> {
    let found = world
        .service
        .discover(&name)
        .map_err(|err| eyre::eyre!("discover failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("expected agent '{name}' to be discoverable"))?;
    world.last_discovered = Some(found);
    Ok(())
}

#[then(r#"the discovered model reference is "{model}""#)]
fn discovered_model_is(world: &DescriptorWorld, model: String) -> Result<(), eyre::Report> {
    let discovered = world
        .last_discovered
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no descriptor discovered in scenario world"))?;
    if discovered.model_reference().as_str() != model {
        return Err(eyre::eyre!(
            "expected model '{model}', found '{}'",
            discovered.model_reference()
        ));
    }
    Ok(())
}

#[then(r#"registration fails with a configuration error for the "{field}" field"#)]
fn registration_fails_for_field(
    world: &DescriptorWorld,
    field: String,
) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    let failed_field = match result {
        Err(DescriptorRegistryServiceError::Configuration(err)) => err.field(),
        other => return Err(eyre::eyre!("expected configuration error, got {other:?}")),
    };
    let expected = DescriptorField::ALL
        .into_iter()
        .find(|candidate| candidate.as_str() == field)
        .ok_or_else(|| eyre::eyre!("unknown descriptor field '{field}'"))?;
    if failed_field != expected {
        return Err(eyre::eyre!(
            "expected failure on '{expected}', got '{failed_field}'"
        ));
    }
    Ok(())
}

#[then("registration fails with a duplicate name error")]
fn registration_fails_with_duplicate_name(world: &DescriptorWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(
        result,
        Err(DescriptorRegistryServiceError::Registry(
            DescriptorRegistryError::DuplicateAgentName(_)
        ))
    ) {
        return Err(eyre::eyre!("expected duplicate name error, got {result:?}"));
    }
    Ok(())
}

#[then("listing descriptors returns {count:usize} entries")]
fn listing_returns_count(world: &DescriptorWorld, count: usize) -> Result<(), eyre::Report> {
    let all = world
        .service
        .list()
        .map_err(|err| eyre::eyre!("list failed: {err}"))?;
    if all.len() != count {
        return Err(eyre::eyre!(
            "expected {count} descriptors, found {}",
            all.len()
        ));
    }
    Ok(())
}
