use anyhow::Context;
use env_defs::{Queue, QueueSpec};
use log::{info, warn};

use crate::interface::QueueHandler;

/// Create the queue with the default delay and retention. The ARN is looked
/// up afterwards; if that lookup fails the queue still exists and is
/// returned without one.
pub async fn create_queue(
    queues: &dyn QueueHandler,
    queue_name: &str,
) -> Result<Queue, anyhow::Error> {
    let spec = QueueSpec::with_defaults(queue_name);
    let url = queues
        .create_queue(&spec)
        .await
        .context(format!("Failed to create queue {}", queue_name))?;
    info!("Created queue {} at {}", queue_name, url);

    let arn = match queues.get_queue_arn(&url).await {
        Ok(arn) => Some(arn),
        Err(e) => {
            warn!("Could not resolve ARN of queue {}: {}", url, e);
            None
        }
    };

    Ok(Queue {
        name: queue_name.to_string(),
        url,
        arn,
    })
}
