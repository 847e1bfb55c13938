use env_defs::{ConfigError, Stage};

use crate::arn::ecr_image_uri;

pub const STAGE_VAR: &str = "STAGE";
pub const REGION_VAR: &str = "AWS_DEFAULT_REGION";
pub const ACCOUNT_ID_VAR: &str = "ACCOUNT_ID";
pub const ECR_REPOSITORY_VAR: &str = "DOCKER_ECR_REPO";

/// Settings every action runs with, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvisionerConfig {
    pub stage: Stage,
    pub region: String,
    pub account_id: String,
    /// Only needed when a function is created or updated from an image
    pub ecr_repository: Option<String>,
}

impl ProvisionerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let stage = non_empty(STAGE_VAR)
            .ok_or_else(|| ConfigError::MissingVariable(STAGE_VAR.to_string()))?
            .parse::<Stage>()?;
        let region = non_empty(REGION_VAR)
            .ok_or_else(|| ConfigError::MissingVariable(REGION_VAR.to_string()))?;
        let account_id = non_empty(ACCOUNT_ID_VAR)
            .ok_or_else(|| ConfigError::MissingVariable(ACCOUNT_ID_VAR.to_string()))?;

        Ok(ProvisionerConfig {
            stage,
            region,
            account_id,
            ecr_repository: non_empty(ECR_REPOSITORY_VAR),
        })
    }

    pub fn ecr_repository(&self) -> Result<&str, ConfigError> {
        self.ecr_repository
            .as_deref()
            .ok_or_else(|| ConfigError::MissingVariable(ECR_REPOSITORY_VAR.to_string()))
    }

    /// `latest` tag of the configured repository in this account and region.
    pub fn function_image_uri(&self) -> Result<String, ConfigError> {
        Ok(ecr_image_uri(
            &self.account_id,
            &self.region,
            self.ecr_repository()?,
        ))
    }
}
