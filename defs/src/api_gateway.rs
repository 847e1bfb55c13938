use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Named;

pub const ROOT_RESOURCE_PATH: &str = "/";
pub const ENTRY_PATH_PART: &str = "entry";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RestApi {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Seconds since epoch
    pub created_date: Option<i64>,
}

impl Named for RestApi {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiResource {
    pub id: String,
    pub parent_id: Option<String>,
    pub path: Option<String>,
    pub path_part: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiDeployment {
    pub id: String,
    pub stage: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationKind {
    /// Service integration with mapping templates, e.g. SQS SendMessage
    Aws,
    /// Request is passed through untouched, e.g. Lambda proxy
    AwsProxy,
}

impl IntegrationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrationKind::Aws => "AWS",
            IntegrationKind::AwsProxy => "AWS_PROXY",
        }
    }
}

/// Everything needed to hang one method with its backend integration off a
/// new child resource of an API's root.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IntegrationPlan {
    pub path_part: String,
    pub http_method: String,
    pub authorization_type: String,
    pub kind: IntegrationKind,
    pub integration_http_method: String,
    pub uri: String,
    pub credentials: Option<String>,
    pub request_parameters: HashMap<String, String>,
    pub request_templates: HashMap<String, String>,
    pub status_code: String,
    pub response_templates: HashMap<String, String>,
    pub response_models: HashMap<String, String>,
}
