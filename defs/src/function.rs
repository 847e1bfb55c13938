use serde::{Deserialize, Serialize};

pub const DEFAULT_FUNCTION_TIMEOUT: i32 = 17;

#[derive(Debug, Clone, PartialEq)]
pub enum FunctionCode {
    /// Container image URI in ECR
    Image(String),
    /// Zip archive contents with the runtime and handler it runs under
    Zip {
        archive: Vec<u8>,
        runtime: String,
        handler: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSpec {
    pub name: String,
    pub role_arn: String,
    pub code: FunctionCode,
    pub timeout: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FunctionInfo {
    pub name: String,
    pub arn: Option<String>,
    pub last_update_status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EventSourceMappingSpec {
    pub event_source_arn: String,
    pub function_name: String,
    pub batch_size: i32,
    pub enabled: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EventSourceMapping {
    pub uuid: String,
    pub state: Option<String>,
}
