mod api_gateway;
mod clients;
mod errors;
mod http_client;
mod iam;
mod lambda;
mod sqs;

pub use api_gateway::{
    create_deployment, create_resource, create_rest_api, delete_rest_api, get_resources,
    get_rest_apis, put_integration, put_integration_response, put_method, put_method_response,
};
pub use clients::AwsClients;
pub use errors::classify_error_code;
pub use http_client::{http_post_message, HttpResponse};
pub use iam::{attach_role_policy, create_role, get_role};
pub use lambda::{
    add_invoke_permission, create_event_source_mapping, create_function, update_function_code,
};
pub use sqs::{create_queue, get_queue_arn};
