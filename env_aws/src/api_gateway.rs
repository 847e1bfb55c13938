use std::collections::HashMap;

use aws_sdk_apigateway::types::IntegrationType;
use aws_sdk_apigateway::Client;
use env_defs::{ApiDeployment, ApiResource, IntegrationPlan, ProviderError, RestApi};
use log::{debug, info};

use crate::errors::provider_error;

// Largest page size API Gateway accepts
const PAGE_LIMIT: i32 = 500;

fn to_rest_api(
    id: Option<&str>,
    name: Option<&str>,
    description: Option<&str>,
    created_date: Option<&aws_smithy_types::DateTime>,
) -> Result<RestApi, ProviderError> {
    let id = id.ok_or_else(|| ProviderError::IncompleteResponse("REST API id".to_string()))?;
    Ok(RestApi {
        id: id.to_string(),
        name: name.unwrap_or_default().to_string(),
        description: description.map(str::to_string),
        created_date: created_date.map(|date| date.secs()),
    })
}

pub(crate) fn rest_api_from_sdk(
    api: &aws_sdk_apigateway::types::RestApi,
) -> Result<RestApi, ProviderError> {
    to_rest_api(api.id(), api.name(), api.description(), api.created_date())
}

pub(crate) fn resource_from_sdk(
    resource: &aws_sdk_apigateway::types::Resource,
) -> Result<ApiResource, ProviderError> {
    let id = resource
        .id()
        .ok_or_else(|| ProviderError::IncompleteResponse("resource id".to_string()))?;
    Ok(ApiResource {
        id: id.to_string(),
        parent_id: resource.parent_id().map(str::to_string),
        path: resource.path().map(str::to_string),
        path_part: resource.path_part().map(str::to_string),
    })
}

/// Every REST API in the account and region, following pagination.
pub async fn get_rest_apis(client: &Client) -> Result<Vec<RestApi>, ProviderError> {
    let mut apis = Vec::new();
    let mut position: Option<String> = None;
    loop {
        let response = client
            .get_rest_apis()
            .set_position(position.take())
            .limit(PAGE_LIMIT)
            .send()
            .await
            .map_err(|e| provider_error("GetRestApis", e))?;

        for api in response.items() {
            apis.push(rest_api_from_sdk(api)?);
        }

        match response.position() {
            Some(next) => position = Some(next.to_string()),
            None => break,
        }
    }
    debug!("Found {} REST APIs", apis.len());
    Ok(apis)
}

pub async fn create_rest_api(client: &Client, name: &str) -> Result<RestApi, ProviderError> {
    let response = client
        .create_rest_api()
        .name(name)
        .send()
        .await
        .map_err(|e| provider_error("CreateRestApi", e))?;
    let api = to_rest_api(
        response.id(),
        response.name(),
        response.description(),
        response.created_date(),
    )?;
    info!("Created REST API {} with id {}", name, api.id);
    Ok(api)
}

pub async fn delete_rest_api(client: &Client, rest_api_id: &str) -> Result<(), ProviderError> {
    client
        .delete_rest_api()
        .rest_api_id(rest_api_id)
        .send()
        .await
        .map_err(|e| provider_error("DeleteRestApi", e))?;
    info!("Deleted REST API with id {}", rest_api_id);
    Ok(())
}

pub async fn get_resources(
    client: &Client,
    rest_api_id: &str,
) -> Result<Vec<ApiResource>, ProviderError> {
    let mut resources = Vec::new();
    let mut position: Option<String> = None;
    loop {
        let response = client
            .get_resources()
            .rest_api_id(rest_api_id)
            .set_position(position.take())
            .limit(PAGE_LIMIT)
            .send()
            .await
            .map_err(|e| provider_error("GetResources", e))?;

        for resource in response.items() {
            resources.push(resource_from_sdk(resource)?);
        }

        match response.position() {
            Some(next) => position = Some(next.to_string()),
            None => break,
        }
    }
    Ok(resources)
}

pub async fn create_resource(
    client: &Client,
    rest_api_id: &str,
    parent_id: &str,
    path_part: &str,
) -> Result<ApiResource, ProviderError> {
    let response = client
        .create_resource()
        .rest_api_id(rest_api_id)
        .parent_id(parent_id)
        .path_part(path_part)
        .send()
        .await
        .map_err(|e| provider_error("CreateResource", e))?;
    let id = response
        .id()
        .ok_or_else(|| ProviderError::IncompleteResponse("resource id".to_string()))?;
    info!("Created resource /{} with id {}", path_part, id);
    Ok(ApiResource {
        id: id.to_string(),
        parent_id: response.parent_id().map(str::to_string),
        path: response.path().map(str::to_string),
        path_part: response.path_part().map(str::to_string),
    })
}

pub async fn put_method(
    client: &Client,
    rest_api_id: &str,
    resource_id: &str,
    plan: &IntegrationPlan,
) -> Result<(), ProviderError> {
    client
        .put_method()
        .rest_api_id(rest_api_id)
        .resource_id(resource_id)
        .http_method(&plan.http_method)
        .authorization_type(&plan.authorization_type)
        .send()
        .await
        .map_err(|e| provider_error("PutMethod", e))?;
    Ok(())
}

pub async fn put_integration(
    client: &Client,
    rest_api_id: &str,
    resource_id: &str,
    plan: &IntegrationPlan,
) -> Result<(), ProviderError> {
    client
        .put_integration()
        .rest_api_id(rest_api_id)
        .resource_id(resource_id)
        .http_method(&plan.http_method)
        .r#type(IntegrationType::from(plan.kind.as_str()))
        .integration_http_method(&plan.integration_http_method)
        .uri(&plan.uri)
        .set_credentials(plan.credentials.clone())
        .set_request_parameters(non_empty(&plan.request_parameters))
        .set_request_templates(non_empty(&plan.request_templates))
        .send()
        .await
        .map_err(|e| provider_error("PutIntegration", e))?;
    Ok(())
}

pub async fn put_integration_response(
    client: &Client,
    rest_api_id: &str,
    resource_id: &str,
    plan: &IntegrationPlan,
) -> Result<(), ProviderError> {
    client
        .put_integration_response()
        .rest_api_id(rest_api_id)
        .resource_id(resource_id)
        .http_method(&plan.http_method)
        .status_code(&plan.status_code)
        .set_response_templates(non_empty(&plan.response_templates))
        .send()
        .await
        .map_err(|e| provider_error("PutIntegrationResponse", e))?;
    Ok(())
}

pub async fn put_method_response(
    client: &Client,
    rest_api_id: &str,
    resource_id: &str,
    plan: &IntegrationPlan,
) -> Result<(), ProviderError> {
    client
        .put_method_response()
        .rest_api_id(rest_api_id)
        .resource_id(resource_id)
        .http_method(&plan.http_method)
        .status_code(&plan.status_code)
        .set_response_models(non_empty(&plan.response_models))
        .send()
        .await
        .map_err(|e| provider_error("PutMethodResponse", e))?;
    Ok(())
}

pub async fn create_deployment(
    client: &Client,
    rest_api_id: &str,
    stage_name: &str,
) -> Result<ApiDeployment, ProviderError> {
    let response = client
        .create_deployment()
        .rest_api_id(rest_api_id)
        .stage_name(stage_name)
        .send()
        .await
        .map_err(|e| provider_error("CreateDeployment", e))?;
    let id = response
        .id()
        .ok_or_else(|| ProviderError::IncompleteResponse("deployment id".to_string()))?;
    Ok(ApiDeployment {
        id: id.to_string(),
        stage: stage_name.to_string(),
        description: response.description().map(str::to_string),
    })
}

fn non_empty(map: &HashMap<String, String>) -> Option<HashMap<String, String>> {
    if map.is_empty() {
        None
    } else {
        Some(map.clone())
    }
}
