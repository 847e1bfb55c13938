use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource already exists or is being modified: {0}")]
    Conflict(String),

    #[error("You are not allowed to perform this request: {0}")]
    PermissionDenied(String),

    #[error("The request was throttled by the provider: {0}")]
    Throttled(String),

    #[error("The provider response is missing {0}")]
    IncompleteResponse(String),

    #[error("An error occured when serving the request: {0}")]
    Other(String),
}

impl ProviderError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, ProviderError::Conflict(_))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required, for example: \"export {0}=...\"")]
    MissingVariable(String),

    #[error("STAGE must be either \"dev\" or \"prod\", got \"{0}\"")]
    InvalidStage(String),
}
