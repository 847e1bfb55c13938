use std::collections::HashMap;

use anyhow::{anyhow, Context};
use env_aws::HttpResponse;
use env_defs::{
    ApiDeployment, ApiResource, IntegrationKind, IntegrationPlan, ProviderError, RestApi, Stage,
    ENTRY_PATH_PART, ROOT_RESOURCE_PATH,
};
use env_utils::{invoke_url, sqs_integration_uri, ProvisionerConfig};
use log::info;
use serde_json::Value;

use super::api_role::{ensure_role, role_name_for, API_GATEWAY_ROLE};
use super::find_or_create::find_or_create;
use crate::interface::{ApiGatewayHandler, IamHandler};

const SUCCESS_STATUS_CODE: &str = "200";

/// The API plus the child resource an integration was wired onto.
#[derive(Debug, Clone, PartialEq)]
pub struct WiredIntegration {
    pub api: RestApi,
    pub resource: ApiResource,
}

/// A deployment together with the API it was cut from.
#[derive(Debug, Clone, PartialEq)]
pub struct DeployedApi {
    pub api: RestApi,
    pub deployment: ApiDeployment,
}

impl DeployedApi {
    pub fn entry_url(&self, region: &str) -> String {
        invoke_url(&self.api.id, region, &self.deployment.stage, ENTRY_PATH_PART)
    }
}

pub async fn find_or_create_rest_api(
    api_gateway: &dyn ApiGatewayHandler,
    api_name: &str,
) -> Result<RestApi, ProviderError> {
    find_or_create(
        api_name,
        move || api_gateway.get_rest_apis(),
        move || api_gateway.create_rest_api(api_name),
    )
    .await
}

pub async fn find_rest_api(
    api_gateway: &dyn ApiGatewayHandler,
    api_name: &str,
) -> Result<RestApi, ProviderError> {
    api_gateway
        .get_rest_apis()
        .await?
        .into_iter()
        .find(|api| api.name == api_name)
        .ok_or_else(|| ProviderError::NotFound(format!("API {} does not exist", api_name)))
}

pub async fn list_rest_apis(
    api_gateway: &dyn ApiGatewayHandler,
) -> Result<Vec<RestApi>, anyhow::Error> {
    api_gateway
        .get_rest_apis()
        .await
        .context("Failed to get APIs")
}

/// SQS SendMessage behind `POST /entry`, called with `credentials_role_arn`.
pub fn sqs_integration_plan(
    config: &ProvisionerConfig,
    queue_name: &str,
    credentials_role_arn: &str,
) -> IntegrationPlan {
    IntegrationPlan {
        path_part: ENTRY_PATH_PART.to_string(),
        http_method: "POST".to_string(),
        authorization_type: "NONE".to_string(),
        kind: IntegrationKind::Aws,
        integration_http_method: "POST".to_string(),
        uri: sqs_integration_uri(&config.region, &config.account_id, queue_name),
        credentials: Some(credentials_role_arn.to_string()),
        request_parameters: HashMap::from([(
            "integration.request.header.Content-Type".to_string(),
            "'application/x-www-form-urlencoded'".to_string(),
        )]),
        request_templates: HashMap::from([(
            "application/json".to_string(),
            "Action=SendMessage&MessageBody=$input.body".to_string(),
        )]),
        status_code: SUCCESS_STATUS_CODE.to_string(),
        response_templates: HashMap::from([("application/json".to_string(), String::new())]),
        response_models: HashMap::from([("application/json".to_string(), "Empty".to_string())]),
    }
}

/// Create a child resource under the API root and hang the planned method,
/// integration and 200 response mappings off it.
///
/// Calls are strictly ordered and the first failure stops the sequence;
/// nothing already created is rolled back. A new child resource is created
/// on every call, so running this twice against the same API does not reuse
/// the earlier one.
pub async fn wire_integration(
    api_gateway: &dyn ApiGatewayHandler,
    api: &RestApi,
    plan: &IntegrationPlan,
) -> Result<ApiResource, anyhow::Error> {
    let root = api_gateway
        .get_resources(&api.id)
        .await
        .context("Failed to get resources of API Gateway")?
        .into_iter()
        .find(|resource| resource.path.as_deref() == Some(ROOT_RESOURCE_PATH))
        .ok_or_else(|| anyhow!("Failed to get root resource of API Gateway {}", api.name))?;

    let resource = api_gateway
        .create_resource(&api.id, &root.id, &plan.path_part)
        .await
        .context("Failed to create resource")?;

    api_gateway
        .put_method(&api.id, &resource.id, plan)
        .await
        .context(format!("Failed to put {} method", plan.http_method))?;

    api_gateway
        .put_integration(&api.id, &resource.id, plan)
        .await
        .context("Failed to put integration")?;

    api_gateway
        .put_integration_response(&api.id, &resource.id, plan)
        .await
        .context("Failed to put integration response")?;

    api_gateway
        .put_method_response(&api.id, &resource.id, plan)
        .await
        .context("Failed to put method response")?;

    info!(
        "Wired {} /{} of API {} to {}",
        plan.http_method, plan.path_part, api.name, plan.uri
    );
    Ok(resource)
}

pub async fn create_rest_api_with_sqs_integration(
    api_gateway: &dyn ApiGatewayHandler,
    iam: &dyn IamHandler,
    config: &ProvisionerConfig,
    api_name: &str,
    queue_name: &str,
) -> Result<WiredIntegration, anyhow::Error> {
    let role = ensure_role(iam, &role_name_for(api_name), &API_GATEWAY_ROLE)
        .await
        .context("Failed to get or create role for API Gateway")?;

    let api = find_or_create_rest_api(api_gateway, api_name)
        .await
        .context("Failed to find or create API Gateway")?;
    info!("Api details: {:?}", api);

    let plan = sqs_integration_plan(config, queue_name, &role.arn);
    let resource = wire_integration(api_gateway, &api, &plan).await?;

    info!(
        "Successfully created API Gateway named {} with SQS integration",
        api_name
    );
    Ok(WiredIntegration { api, resource })
}

pub async fn deploy_api_gateway(
    api_gateway: &dyn ApiGatewayHandler,
    api_name: &str,
    stage: Stage,
) -> Result<DeployedApi, anyhow::Error> {
    let api = find_or_create_rest_api(api_gateway, api_name)
        .await
        .context("Failed to find or create API Gateway")?;
    let deployment = api_gateway
        .create_deployment(&api.id, stage.as_str())
        .await
        .context(format!("Failed to deploy API {} to stage {}", api_name, stage))?;
    info!("Deployed API {} to stage {}: {:?}", api_name, stage, deployment);
    Ok(DeployedApi { api, deployment })
}

pub async fn delete_api_gateway(
    api_gateway: &dyn ApiGatewayHandler,
    api_name: &str,
) -> Result<RestApi, anyhow::Error> {
    let api = find_rest_api(api_gateway, api_name).await?;
    api_gateway
        .delete_rest_api(&api.id)
        .await
        .context(format!("Failed to delete API {}", api_name))?;
    Ok(api)
}

/// Where a deployed API accepts messages for the configured stage.
pub async fn api_entry_url(
    api_gateway: &dyn ApiGatewayHandler,
    config: &ProvisionerConfig,
    api_name: &str,
) -> Result<String, anyhow::Error> {
    let api = find_rest_api(api_gateway, api_name).await?;
    Ok(invoke_url(
        &api.id,
        &config.region,
        config.stage.as_str(),
        ENTRY_PATH_PART,
    ))
}

pub async fn make_api_request(
    api_gateway: &dyn ApiGatewayHandler,
    config: &ProvisionerConfig,
    api_name: &str,
    message: &str,
) -> Result<HttpResponse, anyhow::Error> {
    let url = api_entry_url(api_gateway, config, api_name).await?;
    env_aws::http_post_message(&url, message).await
}

/// Pretty JSON of a response body, or the body itself when it is not JSON.
pub fn render_response_body(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    }
}
