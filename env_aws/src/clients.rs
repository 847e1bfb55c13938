use aws_config::{Region, SdkConfig};
use log::info;

/// One client per AWS service the provisioner talks to, all sharing the
/// same credentials and region.
#[derive(Clone, Debug)]
pub struct AwsClients {
    pub api_gateway: aws_sdk_apigateway::Client,
    pub iam: aws_sdk_iam::Client,
    pub lambda: aws_sdk_lambda::Client,
    pub sqs: aws_sdk_sqs::Client,
}

impl AwsClients {
    /// Credentials come from the default provider chain; endpoint overrides
    /// such as `AWS_ENDPOINT_URL` are honored by the SDK itself.
    pub async fn new(region: &str) -> Self {
        info!("Loading AWS configuration for region: {}", region);
        let shared_config = aws_config::from_env()
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self::from_shared_config(&shared_config)
    }

    pub fn from_shared_config(shared_config: &SdkConfig) -> Self {
        AwsClients {
            api_gateway: aws_sdk_apigateway::Client::new(shared_config),
            iam: aws_sdk_iam::Client::new(shared_config),
            lambda: aws_sdk_lambda::Client::new(shared_config),
            sqs: aws_sdk_sqs::Client::new(shared_config),
        }
    }
}
