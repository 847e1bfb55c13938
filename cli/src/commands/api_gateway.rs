use anyhow::Result;
use env_common::{logic, ApiGatewayHandler, IamHandler};
use env_defs::RestApi;
use env_utils::{epoch_seconds_to_timestamp, ProvisionerConfig};
use log::info;

fn print_wired(wired: &logic::WiredIntegration) {
    println!("API ID: {}", wired.api.id);
    println!("API name: {}", wired.api.name);
    println!(
        "Resource: {} ({})",
        wired.resource.path.as_deref().unwrap_or("-"),
        wired.resource.id
    );
}

pub async fn handle_create_sqs_integration(
    api_gateway: &dyn ApiGatewayHandler,
    iam: &dyn IamHandler,
    config: &ProvisionerConfig,
    api_name: &str,
    queue_name: &str,
) -> Result<()> {
    let wired = logic::create_rest_api_with_sqs_integration(
        api_gateway,
        iam,
        config,
        api_name,
        queue_name,
    )
    .await?;
    print_wired(&wired);
    Ok(())
}

#[cfg(feature = "lambda-integration")]
pub async fn handle_create_lambda_integration(
    api_gateway: &dyn ApiGatewayHandler,
    lambda: &dyn env_common::LambdaHandler,
    config: &ProvisionerConfig,
    api_name: &str,
    function_name: &str,
) -> Result<()> {
    let wired = logic::create_rest_api_with_lambda_integration(
        api_gateway,
        lambda,
        config,
        api_name,
        function_name,
    )
    .await?;
    print_wired(&wired);
    Ok(())
}

fn format_rest_api_row(api: &RestApi) -> String {
    let created = api
        .created_date
        .map(epoch_seconds_to_timestamp)
        .unwrap_or_default();
    format!(
        "{:<12} {:<30} {:<22} {}",
        api.id,
        api.name,
        created,
        api.description.as_deref().unwrap_or("")
    )
}

pub async fn handle_list(api_gateway: &dyn ApiGatewayHandler) -> Result<()> {
    let apis = logic::list_rest_apis(api_gateway).await?;
    println!(
        "{:<12} {:<30} {:<22} {}",
        "ID", "Name", "Created", "Description"
    );
    for api in &apis {
        println!("{}", format_rest_api_row(api));
    }
    info!("Found {} REST APIs", apis.len());
    Ok(())
}

pub async fn handle_deploy(
    api_gateway: &dyn ApiGatewayHandler,
    config: &ProvisionerConfig,
    api_name: &str,
) -> Result<()> {
    let deployed = logic::deploy_api_gateway(api_gateway, api_name, config.stage).await?;
    println!("Deployment ID: {}", deployed.deployment.id);
    println!("Stage: {}", deployed.deployment.stage);
    println!("Invoke URL: {}", deployed.entry_url(&config.region));
    Ok(())
}

pub async fn handle_make_request(
    api_gateway: &dyn ApiGatewayHandler,
    config: &ProvisionerConfig,
    api_name: &str,
    message: &str,
) -> Result<()> {
    let response = logic::make_api_request(api_gateway, config, api_name, message).await?;
    println!("Status: {}", response.status);
    println!("{}", logic::render_response_body(&response.body));
    Ok(())
}

pub async fn handle_delete(api_gateway: &dyn ApiGatewayHandler, api_name: &str) -> Result<()> {
    let api = logic::delete_api_gateway(api_gateway, api_name).await?;
    println!("Deleted API {} ({})", api.name, api.id);
    Ok(())
}
