mod api_gateway;
mod errors;
mod function;
mod iam;
mod queue;
mod stage;

pub use api_gateway::{
    ApiDeployment, ApiResource, IntegrationKind, IntegrationPlan, RestApi, ENTRY_PATH_PART,
    ROOT_RESOURCE_PATH,
};
pub use errors::{ConfigError, ProviderError};
pub use function::{
    EventSourceMapping, EventSourceMappingSpec, FunctionCode, FunctionInfo, FunctionSpec,
    DEFAULT_FUNCTION_TIMEOUT,
};
pub use iam::{Role, RoleProfile};
pub use queue::{Queue, QueueSpec};
pub use stage::Stage;

/// Anything the provider identifies by a human-readable name.
pub trait Named {
    fn name(&self) -> &str;
}
