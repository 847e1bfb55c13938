use std::path::Path;

use anyhow::Result;
use env_common::{logic, LambdaHandler};
use env_defs::FunctionInfo;
use env_utils::ProvisionerConfig;

fn print_function(function: &FunctionInfo) {
    println!("Function name: {}", function.name);
    if let Some(arn) = &function.arn {
        println!("Function ARN: {}", arn);
    }
    if let Some(status) = &function.last_update_status {
        println!("Last update status: {}", status);
    }
}

pub async fn handle_create_function(
    lambda: &dyn LambdaHandler,
    config: &ProvisionerConfig,
    function_name: &str,
    role_arn: &str,
) -> Result<()> {
    let function = logic::create_function(lambda, config, function_name, role_arn).await?;
    print_function(&function);
    Ok(())
}

pub async fn handle_create_function_from_zip(
    lambda: &dyn LambdaHandler,
    function_name: &str,
    role_arn: &str,
    zip_path: &str,
) -> Result<()> {
    let function =
        logic::create_function_from_zip(lambda, function_name, role_arn, Path::new(zip_path))
            .await?;
    print_function(&function);
    Ok(())
}

pub async fn handle_update_function(
    lambda: &dyn LambdaHandler,
    config: &ProvisionerConfig,
    function_name: &str,
) -> Result<()> {
    let function = logic::update_function(lambda, config, function_name).await?;
    print_function(&function);
    Ok(())
}

pub async fn handle_create_event_source_mapping(
    lambda: &dyn LambdaHandler,
    queue_arn: &str,
    function_name: &str,
) -> Result<()> {
    let mapping = logic::create_event_source_mapping(lambda, queue_arn, function_name).await?;
    println!("Event source mapping UUID: {}", mapping.uuid);
    if let Some(state) = &mapping.state {
        println!("State: {}", state);
    }
    Ok(())
}
