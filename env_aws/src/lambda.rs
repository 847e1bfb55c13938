use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types::{FunctionCode as SdkFunctionCode, PackageType, Runtime};
use aws_sdk_lambda::Client;
use env_defs::{
    EventSourceMapping, EventSourceMappingSpec, FunctionCode, FunctionInfo, FunctionSpec,
    ProviderError,
};
use log::info;

use crate::errors::provider_error;

fn to_function_info(
    fallback_name: &str,
    function_name: Option<&str>,
    function_arn: Option<&str>,
    last_update_status: Option<&str>,
) -> FunctionInfo {
    FunctionInfo {
        name: function_name.unwrap_or(fallback_name).to_string(),
        arn: function_arn.map(str::to_string),
        last_update_status: last_update_status.map(str::to_string),
    }
}

pub async fn create_function(
    client: &Client,
    spec: &FunctionSpec,
) -> Result<FunctionInfo, ProviderError> {
    let request = client
        .create_function()
        .function_name(&spec.name)
        .role(&spec.role_arn)
        .timeout(spec.timeout);

    let request = match &spec.code {
        FunctionCode::Image(image_uri) => request
            .package_type(PackageType::Image)
            .code(SdkFunctionCode::builder().image_uri(image_uri).build()),
        FunctionCode::Zip {
            archive,
            runtime,
            handler,
        } => request
            .package_type(PackageType::Zip)
            .runtime(Runtime::from(runtime.as_str()))
            .handler(handler)
            .code(
                SdkFunctionCode::builder()
                    .zip_file(Blob::new(archive.clone()))
                    .build(),
            ),
    };

    let response = request
        .send()
        .await
        .map_err(|e| provider_error("CreateFunction", e))?;

    let function = to_function_info(
        &spec.name,
        response.function_name(),
        response.function_arn(),
        response.last_update_status().map(|status| status.as_str()),
    );
    info!("Created function {} ({:?})", function.name, function.arn);
    Ok(function)
}

/// Point an existing image-packaged function at a new image.
pub async fn update_function_code(
    client: &Client,
    function_name: &str,
    image_uri: &str,
) -> Result<FunctionInfo, ProviderError> {
    let response = client
        .update_function_code()
        .function_name(function_name)
        .image_uri(image_uri)
        .send()
        .await
        .map_err(|e| provider_error("UpdateFunctionCode", e))?;

    Ok(to_function_info(
        function_name,
        response.function_name(),
        response.function_arn(),
        response.last_update_status().map(|status| status.as_str()),
    ))
}

pub async fn create_event_source_mapping(
    client: &Client,
    spec: &EventSourceMappingSpec,
) -> Result<EventSourceMapping, ProviderError> {
    let response = client
        .create_event_source_mapping()
        .event_source_arn(&spec.event_source_arn)
        .function_name(&spec.function_name)
        .enabled(spec.enabled)
        .batch_size(spec.batch_size)
        .send()
        .await
        .map_err(|e| provider_error("CreateEventSourceMapping", e))?;

    let uuid = response.uuid().ok_or_else(|| {
        ProviderError::IncompleteResponse("event source mapping UUID".to_string())
    })?;
    Ok(EventSourceMapping {
        uuid: uuid.to_string(),
        state: response.state().map(str::to_string),
    })
}

/// Allow `principal` to invoke the function when called from `source_arn`.
pub async fn add_invoke_permission(
    client: &Client,
    function_name: &str,
    statement_id: &str,
    principal: &str,
    source_arn: &str,
) -> Result<(), ProviderError> {
    client
        .add_permission()
        .function_name(function_name)
        .statement_id(statement_id)
        .action("lambda:InvokeFunction")
        .principal(principal)
        .source_arn(source_arn)
        .send()
        .await
        .map_err(|e| provider_error("AddPermission", e))?;
    Ok(())
}
