use anyhow::Result;
use env_common::{logic::create_queue, QueueHandler};

pub async fn handle_create_queue(queues: &dyn QueueHandler, name: &str) -> Result<()> {
    let queue = create_queue(queues, name).await?;
    println!("Queue URL: {}", queue.url);
    match &queue.arn {
        Some(arn) => println!("Queue ARN: {}", arn),
        None => println!("Queue ARN: (unavailable)"),
    }
    Ok(())
}
