use aws_sdk_sqs::types::QueueAttributeName;
use aws_sdk_sqs::Client;
use env_defs::{ProviderError, QueueSpec};
use log::info;

use crate::errors::provider_error;

/// Returns the URL of the new queue.
pub async fn create_queue(client: &Client, spec: &QueueSpec) -> Result<String, ProviderError> {
    let response = client
        .create_queue()
        .queue_name(&spec.name)
        .attributes(QueueAttributeName::DelaySeconds, spec.delay_seconds.to_string())
        .attributes(
            QueueAttributeName::MessageRetentionPeriod,
            spec.message_retention_period.to_string(),
        )
        .send()
        .await
        .map_err(|e| provider_error("CreateQueue", e))?;

    let queue_url = response
        .queue_url()
        .ok_or_else(|| ProviderError::IncompleteResponse("queue URL".to_string()))?;
    info!("Successfully created SQS queue named {}", spec.name);
    Ok(queue_url.to_string())
}

pub async fn get_queue_arn(client: &Client, queue_url: &str) -> Result<String, ProviderError> {
    let response = client
        .get_queue_attributes()
        .queue_url(queue_url)
        .attribute_names(QueueAttributeName::QueueArn)
        .send()
        .await
        .map_err(|e| provider_error("GetQueueAttributes", e))?;

    response
        .attributes()
        .and_then(|attributes| attributes.get(&QueueAttributeName::QueueArn))
        .cloned()
        .ok_or_else(|| ProviderError::IncompleteResponse("queue ARN".to_string()))
}
