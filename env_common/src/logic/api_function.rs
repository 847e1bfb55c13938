use std::path::Path;

use anyhow::Context;
use env_defs::{
    EventSourceMapping, EventSourceMappingSpec, FunctionCode, FunctionInfo, FunctionSpec, Role,
    DEFAULT_FUNCTION_TIMEOUT,
};
use env_utils::ProvisionerConfig;
use log::info;

use super::api_role::{ensure_role, role_name_for, LAMBDA_ROLE};
use crate::interface::{IamHandler, LambdaHandler};

const ZIP_RUNTIME: &str = "provided.al2023";
const ZIP_HANDLER: &str = "bootstrap";

pub async fn create_role_for_function(
    iam: &dyn IamHandler,
    function_name: &str,
) -> Result<Role, anyhow::Error> {
    let role_name = role_name_for(function_name);
    ensure_role(iam, &role_name, &LAMBDA_ROLE)
        .await
        .context(format!("Failed to get or create role {}", role_name))
}

/// Create a function running the configured ECR image. Fails if a function
/// with that name already exists.
pub async fn create_function(
    lambda: &dyn LambdaHandler,
    config: &ProvisionerConfig,
    function_name: &str,
    role_arn: &str,
) -> Result<FunctionInfo, anyhow::Error> {
    let image_uri = config.function_image_uri()?;
    let spec = FunctionSpec {
        name: function_name.to_string(),
        role_arn: role_arn.to_string(),
        code: FunctionCode::Image(image_uri),
        timeout: DEFAULT_FUNCTION_TIMEOUT,
    };

    let function = lambda
        .create_function(&spec)
        .await
        .context(format!("Failed to create function {}", function_name))?;
    info!("Created function {:?}", function);
    Ok(function)
}

pub async fn create_function_from_zip(
    lambda: &dyn LambdaHandler,
    function_name: &str,
    role_arn: &str,
    zip_path: &Path,
) -> Result<FunctionInfo, anyhow::Error> {
    let archive = tokio::fs::read(zip_path)
        .await
        .with_context(|| format!("Failed to read zip archive {}", zip_path.display()))?;
    info!(
        "Read {} bytes of function code from {}",
        archive.len(),
        zip_path.display()
    );

    let spec = FunctionSpec {
        name: function_name.to_string(),
        role_arn: role_arn.to_string(),
        code: FunctionCode::Zip {
            archive,
            runtime: ZIP_RUNTIME.to_string(),
            handler: ZIP_HANDLER.to_string(),
        },
        timeout: DEFAULT_FUNCTION_TIMEOUT,
    };

    let function = lambda
        .create_function(&spec)
        .await
        .context(format!("Failed to create function {}", function_name))?;
    info!("Created function {:?}", function);
    Ok(function)
}

/// Point an existing function at the configured image again so it picks up
/// the latest push.
pub async fn update_function(
    lambda: &dyn LambdaHandler,
    config: &ProvisionerConfig,
    function_name: &str,
) -> Result<FunctionInfo, anyhow::Error> {
    let image_uri = config.function_image_uri()?;
    let function = lambda
        .update_function_code(function_name, &image_uri)
        .await
        .context(format!("Failed to update function {}", function_name))?;
    info!("Updated function {:?}", function);
    Ok(function)
}

pub async fn create_event_source_mapping(
    lambda: &dyn LambdaHandler,
    queue_arn: &str,
    function_name: &str,
) -> Result<EventSourceMapping, anyhow::Error> {
    let spec = EventSourceMappingSpec {
        event_source_arn: queue_arn.to_string(),
        function_name: function_name.to_string(),
        batch_size: 1,
        enabled: true,
    };
    let mapping = lambda.create_event_source_mapping(&spec).await.context(format!(
        "Failed to create event source mapping from {} to {}",
        queue_arn, function_name
    ))?;
    info!("Created event source mapping {}", mapping.uuid);
    Ok(mapping)
}
