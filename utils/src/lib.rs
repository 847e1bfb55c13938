mod arn;
mod config;
mod logging;
mod policy;
mod time;

pub use arn::{
    execute_api_source_arn, invoke_url, lambda_integration_uri, sqs_integration_uri,
};
pub use config::ProvisionerConfig;
pub use logging::setup_logging;
pub use policy::assume_role_policy_document;
pub use time::epoch_seconds_to_timestamp;
