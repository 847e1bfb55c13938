use std::collections::HashMap;

use anyhow::Context;
use env_defs::{IntegrationKind, IntegrationPlan, ProviderError, ENTRY_PATH_PART};
use env_utils::{execute_api_source_arn, lambda_integration_uri, ProvisionerConfig};
use log::{info, warn};

use super::api_gateway::{find_or_create_rest_api, wire_integration, WiredIntegration};
use crate::interface::{ApiGatewayHandler, LambdaHandler};

const API_GATEWAY_PRINCIPAL: &str = "apigateway.amazonaws.com";

/// `GET /entry` proxied to a Lambda function. The function is invoked with
/// the API Gateway service identity, so no credentials role is attached.
pub fn lambda_integration_plan(config: &ProvisionerConfig, function_name: &str) -> IntegrationPlan {
    IntegrationPlan {
        path_part: ENTRY_PATH_PART.to_string(),
        http_method: "GET".to_string(),
        authorization_type: "NONE".to_string(),
        kind: IntegrationKind::AwsProxy,
        integration_http_method: "POST".to_string(),
        uri: lambda_integration_uri(&config.region, &config.account_id, function_name),
        credentials: None,
        request_parameters: HashMap::new(),
        request_templates: HashMap::new(),
        status_code: "200".to_string(),
        response_templates: HashMap::from([("application/json".to_string(), String::new())]),
        response_models: HashMap::from([("application/json".to_string(), "Empty".to_string())]),
    }
}

pub fn invoke_statement_id(api_id: &str, plan: &IntegrationPlan) -> String {
    format!(
        "{}-{}-{}",
        api_id,
        plan.http_method.to_lowercase(),
        plan.path_part
    )
}

pub async fn create_rest_api_with_lambda_integration(
    api_gateway: &dyn ApiGatewayHandler,
    lambda: &dyn LambdaHandler,
    config: &ProvisionerConfig,
    api_name: &str,
    function_name: &str,
) -> Result<WiredIntegration, anyhow::Error> {
    let api = find_or_create_rest_api(api_gateway, api_name)
        .await
        .context("Failed to find or create API Gateway")?;
    info!("Api details: {:?}", api);

    let plan = lambda_integration_plan(config, function_name);
    let resource = wire_integration(api_gateway, &api, &plan).await?;

    let source_arn = execute_api_source_arn(
        &config.region,
        &config.account_id,
        &api.id,
        &plan.http_method,
        &plan.path_part,
    );
    match lambda
        .add_invoke_permission(
            function_name,
            &invoke_statement_id(&api.id, &plan),
            API_GATEWAY_PRINCIPAL,
            &source_arn,
        )
        .await
    {
        Ok(()) => info!("Allowed {} to invoke {}", source_arn, function_name),
        Err(ProviderError::Conflict(_)) => warn!(
            "Invoke permission for {} on {} already exists",
            source_arn, function_name
        ),
        Err(e) => {
            return Err(anyhow::Error::new(e).context(format!(
                "Failed to allow API {} to invoke function {}",
                api_name, function_name
            )))
        }
    }

    info!(
        "Successfully created API Gateway named {} with Lambda integration",
        api_name
    );
    Ok(WiredIntegration { api, resource })
}
