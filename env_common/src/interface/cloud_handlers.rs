use async_trait::async_trait;
use env_aws::AwsClients;
use env_defs::{
    ApiDeployment, ApiResource, EventSourceMapping, EventSourceMappingSpec, FunctionInfo,
    FunctionSpec, IntegrationPlan, ProviderError, QueueSpec, RestApi, Role,
};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ApiGatewayHandler: Send + Sync {
    async fn get_rest_apis(&self) -> Result<Vec<RestApi>, ProviderError>;
    async fn create_rest_api(&self, name: &str) -> Result<RestApi, ProviderError>;
    async fn delete_rest_api(&self, rest_api_id: &str) -> Result<(), ProviderError>;
    async fn get_resources(&self, rest_api_id: &str) -> Result<Vec<ApiResource>, ProviderError>;
    async fn create_resource(
        &self,
        rest_api_id: &str,
        parent_id: &str,
        path_part: &str,
    ) -> Result<ApiResource, ProviderError>;
    async fn put_method(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        plan: &IntegrationPlan,
    ) -> Result<(), ProviderError>;
    async fn put_integration(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        plan: &IntegrationPlan,
    ) -> Result<(), ProviderError>;
    async fn put_integration_response(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        plan: &IntegrationPlan,
    ) -> Result<(), ProviderError>;
    async fn put_method_response(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        plan: &IntegrationPlan,
    ) -> Result<(), ProviderError>;
    async fn create_deployment(
        &self,
        rest_api_id: &str,
        stage_name: &str,
    ) -> Result<ApiDeployment, ProviderError>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait IamHandler: Send + Sync {
    async fn get_role(&self, role_name: &str) -> Result<Role, ProviderError>;
    async fn create_role(
        &self,
        role_name: &str,
        assume_role_policy_document: &str,
    ) -> Result<Role, ProviderError>;
    async fn attach_role_policy(&self, role_name: &str, policy_arn: &str)
        -> Result<(), ProviderError>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait LambdaHandler: Send + Sync {
    async fn create_function(&self, spec: &FunctionSpec) -> Result<FunctionInfo, ProviderError>;
    async fn update_function_code(
        &self,
        function_name: &str,
        image_uri: &str,
    ) -> Result<FunctionInfo, ProviderError>;
    async fn create_event_source_mapping(
        &self,
        spec: &EventSourceMappingSpec,
    ) -> Result<EventSourceMapping, ProviderError>;
    async fn add_invoke_permission(
        &self,
        function_name: &str,
        statement_id: &str,
        principal: &str,
        source_arn: &str,
    ) -> Result<(), ProviderError>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait QueueHandler: Send + Sync {
    async fn create_queue(&self, spec: &QueueSpec) -> Result<String, ProviderError>;
    async fn get_queue_arn(&self, queue_url: &str) -> Result<String, ProviderError>;
}

/// Handlers backed by the real AWS SDK clients.
#[derive(Clone, Debug)]
pub struct AwsCloudHandler {
    pub clients: AwsClients,
}

impl AwsCloudHandler {
    pub async fn new(region: &str) -> Self {
        AwsCloudHandler {
            clients: AwsClients::new(region).await,
        }
    }
}

#[async_trait]
impl ApiGatewayHandler for AwsCloudHandler {
    async fn get_rest_apis(&self) -> Result<Vec<RestApi>, ProviderError> {
        env_aws::get_rest_apis(&self.clients.api_gateway).await
    }
    async fn create_rest_api(&self, name: &str) -> Result<RestApi, ProviderError> {
        env_aws::create_rest_api(&self.clients.api_gateway, name).await
    }
    async fn delete_rest_api(&self, rest_api_id: &str) -> Result<(), ProviderError> {
        env_aws::delete_rest_api(&self.clients.api_gateway, rest_api_id).await
    }
    async fn get_resources(&self, rest_api_id: &str) -> Result<Vec<ApiResource>, ProviderError> {
        env_aws::get_resources(&self.clients.api_gateway, rest_api_id).await
    }
    async fn create_resource(
        &self,
        rest_api_id: &str,
        parent_id: &str,
        path_part: &str,
    ) -> Result<ApiResource, ProviderError> {
        env_aws::create_resource(&self.clients.api_gateway, rest_api_id, parent_id, path_part)
            .await
    }
    async fn put_method(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        plan: &IntegrationPlan,
    ) -> Result<(), ProviderError> {
        env_aws::put_method(&self.clients.api_gateway, rest_api_id, resource_id, plan).await
    }
    async fn put_integration(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        plan: &IntegrationPlan,
    ) -> Result<(), ProviderError> {
        env_aws::put_integration(&self.clients.api_gateway, rest_api_id, resource_id, plan).await
    }
    async fn put_integration_response(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        plan: &IntegrationPlan,
    ) -> Result<(), ProviderError> {
        env_aws::put_integration_response(&self.clients.api_gateway, rest_api_id, resource_id, plan)
            .await
    }
    async fn put_method_response(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        plan: &IntegrationPlan,
    ) -> Result<(), ProviderError> {
        env_aws::put_method_response(&self.clients.api_gateway, rest_api_id, resource_id, plan)
            .await
    }
    async fn create_deployment(
        &self,
        rest_api_id: &str,
        stage_name: &str,
    ) -> Result<ApiDeployment, ProviderError> {
        env_aws::create_deployment(&self.clients.api_gateway, rest_api_id, stage_name).await
    }
}

#[async_trait]
impl IamHandler for AwsCloudHandler {
    async fn get_role(&self, role_name: &str) -> Result<Role, ProviderError> {
        env_aws::get_role(&self.clients.iam, role_name).await
    }
    async fn create_role(
        &self,
        role_name: &str,
        assume_role_policy_document: &str,
    ) -> Result<Role, ProviderError> {
        env_aws::create_role(&self.clients.iam, role_name, assume_role_policy_document).await
    }
    async fn attach_role_policy(
        &self,
        role_name: &str,
        policy_arn: &str,
    ) -> Result<(), ProviderError> {
        env_aws::attach_role_policy(&self.clients.iam, role_name, policy_arn).await
    }
}

#[async_trait]
impl LambdaHandler for AwsCloudHandler {
    async fn create_function(&self, spec: &FunctionSpec) -> Result<FunctionInfo, ProviderError> {
        env_aws::create_function(&self.clients.lambda, spec).await
    }
    async fn update_function_code(
        &self,
        function_name: &str,
        image_uri: &str,
    ) -> Result<FunctionInfo, ProviderError> {
        env_aws::update_function_code(&self.clients.lambda, function_name, image_uri).await
    }
    async fn create_event_source_mapping(
        &self,
        spec: &EventSourceMappingSpec,
    ) -> Result<EventSourceMapping, ProviderError> {
        env_aws::create_event_source_mapping(&self.clients.lambda, spec).await
    }
    async fn add_invoke_permission(
        &self,
        function_name: &str,
        statement_id: &str,
        principal: &str,
        source_arn: &str,
    ) -> Result<(), ProviderError> {
        env_aws::add_invoke_permission(
            &self.clients.lambda,
            function_name,
            statement_id,
            principal,
            source_arn,
        )
        .await
    }
}

#[async_trait]
impl QueueHandler for AwsCloudHandler {
    async fn create_queue(&self, spec: &QueueSpec) -> Result<String, ProviderError> {
        env_aws::create_queue(&self.clients.sqs, spec).await
    }
    async fn get_queue_arn(&self, queue_url: &str) -> Result<String, ProviderError> {
        env_aws::get_queue_arn(&self.clients.sqs, queue_url).await
    }
}
