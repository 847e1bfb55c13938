use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QueueSpec {
    pub name: String,
    pub delay_seconds: u32,
    pub message_retention_period: u32,
}

impl QueueSpec {
    /// Queue that holds every message back for a minute and keeps it for a day.
    pub fn with_defaults(name: &str) -> Self {
        QueueSpec {
            name: name.to_string(),
            delay_seconds: 60,
            message_retention_period: 86400,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Queue {
    pub name: String,
    pub url: String,
    pub arn: Option<String>,
}
