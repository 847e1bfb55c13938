mod api_function;
mod api_gateway;
#[cfg(feature = "lambda-integration")]
mod api_lambda_integration;
mod api_queue;
mod api_role;
mod find_or_create;

pub use api_function::{
    create_event_source_mapping, create_function, create_function_from_zip,
    create_role_for_function, update_function,
};

pub use api_gateway::{
    api_entry_url, create_rest_api_with_sqs_integration, delete_api_gateway, deploy_api_gateway,
    find_or_create_rest_api, find_rest_api, list_rest_apis, make_api_request,
    render_response_body, sqs_integration_plan, wire_integration, DeployedApi, WiredIntegration,
};

#[cfg(feature = "lambda-integration")]
pub use api_lambda_integration::{
    create_rest_api_with_lambda_integration, invoke_statement_id, lambda_integration_plan,
};

pub use api_queue::create_queue;

pub use api_role::{
    attach_policies_to_role, ensure_role, role_name_for, API_GATEWAY_ROLE, FUNCTION_POLICY_ARNS,
    LAMBDA_ROLE,
};

pub use find_or_create::find_or_create;
