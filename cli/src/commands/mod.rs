mod api_gateway;
mod function;
mod queue;
mod role;

use anyhow::Result;
use env_common::{ApiGatewayHandler, IamHandler, LambdaHandler, QueueHandler};
use env_utils::ProvisionerConfig;

use crate::Action;

/// Run one parsed action to completion against the given cloud handler.
pub async fn run_action<H>(action: &Action, config: &ProvisionerConfig, cloud: &H) -> Result<()>
where
    H: ApiGatewayHandler + IamHandler + LambdaHandler + QueueHandler,
{
    match action {
        Action::CreateQueue { name } => queue::handle_create_queue(cloud, name).await,
        Action::CreateRestApiAndSqsIntegration {
            api_name,
            queue_name,
        } => {
            api_gateway::handle_create_sqs_integration(cloud, cloud, config, api_name, queue_name)
                .await
        }
        Action::CreateGetRestApiWithLambdaIntegration {
            api_name,
            function_name,
        } => run_lambda_integration(cloud, config, api_name, function_name).await,
        Action::ListRestApis => api_gateway::handle_list(cloud).await,
        Action::DeployApiGateway { api_name } => {
            api_gateway::handle_deploy(cloud, config, api_name).await
        }
        Action::MakeApiRequest { api_name, message } => {
            api_gateway::handle_make_request(cloud, config, api_name, message).await
        }
        Action::DeleteApiGateway { api_name } => api_gateway::handle_delete(cloud, api_name).await,
        Action::CreateRoleForLambdaFunction { function_name } => {
            role::handle_create_role_for_function(cloud, function_name).await
        }
        Action::AttachPoliciesToRole { role_name } => {
            role::handle_attach_policies(cloud, role_name).await
        }
        Action::CreateLambdaFunction {
            function_name,
            role_arn,
        } => function::handle_create_function(cloud, config, function_name, role_arn).await,
        Action::CreateLambdaFunctionFromZip {
            function_name,
            role_arn,
            zip_path,
        } => {
            function::handle_create_function_from_zip(cloud, function_name, role_arn, zip_path)
                .await
        }
        Action::UpdateLambdaFunction { function_name } => {
            function::handle_update_function(cloud, config, function_name).await
        }
        Action::CreateEventSourceMapping {
            queue_arn,
            function_name,
        } => function::handle_create_event_source_mapping(cloud, queue_arn, function_name).await,
    }
}

#[cfg(feature = "lambda-integration")]
async fn run_lambda_integration<H>(
    cloud: &H,
    config: &ProvisionerConfig,
    api_name: &str,
    function_name: &str,
) -> Result<()>
where
    H: ApiGatewayHandler + LambdaHandler,
{
    api_gateway::handle_create_lambda_integration(cloud, cloud, config, api_name, function_name)
        .await
}

#[cfg(not(feature = "lambda-integration"))]
async fn run_lambda_integration<H>(
    _cloud: &H,
    _config: &ProvisionerConfig,
    api_name: &str,
    function_name: &str,
) -> Result<()>
where
    H: ApiGatewayHandler + LambdaHandler,
{
    Err(anyhow::anyhow!(
        "Cannot wire API {} to function {}: built without the lambda-integration feature",
        api_name,
        function_name
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use env_defs::{
        ApiDeployment, ApiResource, EventSourceMapping, EventSourceMappingSpec, FunctionCode,
        FunctionInfo, FunctionSpec, IntegrationPlan, ProviderError, QueueSpec, RestApi, Role,
        Stage,
    };
    use mockall::mock;
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    mock! {
        pub Cloud {}

        #[async_trait]
        impl ApiGatewayHandler for Cloud {
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

        #[async_trait]
        impl IamHandler for Cloud {
            async fn get_role(&self, role_name: &str) -> Result<Role, ProviderError>;
            async fn create_role(
                &self,
                role_name: &str,
                assume_role_policy_document: &str,
            ) -> Result<Role, ProviderError>;
            async fn attach_role_policy(
                &self,
                role_name: &str,
                policy_arn: &str,
            ) -> Result<(), ProviderError>;
        }

        #[async_trait]
        impl LambdaHandler for Cloud {
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

        #[async_trait]
        impl QueueHandler for Cloud {
            async fn create_queue(&self, spec: &QueueSpec) -> Result<String, ProviderError>;
            async fn get_queue_arn(&self, queue_url: &str) -> Result<String, ProviderError>;
        }
    }

    fn config(stage: Stage) -> ProvisionerConfig {
        ProvisionerConfig {
            stage,
            region: "eu-central-1".to_string(),
            account_id: "123456789012".to_string(),
            ecr_repository: Some("reports".to_string()),
        }
    }

    fn orders_api() -> RestApi {
        RestApi {
            id: "a1b2c3".to_string(),
            name: "ordersApi".to_string(),
            description: None,
            created_date: Some(1617000000),
        }
    }

    fn role(name: &str) -> Role {
        Role {
            name: name.to_string(),
            arn: format!("arn:aws:iam::123456789012:role/{}", name),
        }
    }

    fn function(name: &str) -> FunctionInfo {
        FunctionInfo {
            name: name.to_string(),
            arn: None,
            last_update_status: None,
        }
    }

    /// Root lookup, child resource and the four method/integration calls.
    fn expect_wiring(cloud: &mut MockCloud, http_method: &'static str) {
        cloud.expect_get_resources().with(eq("a1b2c3")).times(1).returning(|_| {
            Ok(vec![ApiResource {
                id: "root1".to_string(),
                parent_id: None,
                path: Some("/".to_string()),
                path_part: None,
            }])
        });
        cloud
            .expect_create_resource()
            .with(eq("a1b2c3"), eq("root1"), eq("entry"))
            .times(1)
            .returning(|_, parent_id, _| {
                Ok(ApiResource {
                    id: "entry1".to_string(),
                    parent_id: Some(parent_id.to_string()),
                    path: Some("/entry".to_string()),
                    path_part: Some("entry".to_string()),
                })
            });
        cloud
            .expect_put_method()
            .withf(move |_, resource_id, plan| {
                resource_id == "entry1" && plan.http_method == http_method
            })
            .times(1)
            .returning(|_, _, _| Ok(()));
        cloud
            .expect_put_integration()
            .times(1)
            .returning(|_, _, _| Ok(()));
        cloud
            .expect_put_integration_response()
            .times(1)
            .returning(|_, _, _| Ok(()));
        cloud
            .expect_put_method_response()
            .times(1)
            .returning(|_, _, _| Ok(()));
    }

    #[tokio::test]
    async fn test_deploy_lists_once_and_uses_configured_stage() {
        let mut cloud = MockCloud::new();
        cloud
            .expect_get_rest_apis()
            .times(1)
            .returning(|| Ok(vec![orders_api()]));
        cloud
            .expect_create_deployment()
            .with(eq("a1b2c3"), eq("prod"))
            .times(1)
            .returning(|_, stage| {
                Ok(ApiDeployment {
                    id: "dep1".to_string(),
                    stage: stage.to_string(),
                    description: None,
                })
            });

        let action = Action::DeployApiGateway {
            api_name: "ordersApi".to_string(),
        };
        run_action(&action, &config(Stage::Prod), &cloud)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_deploy_creates_missing_api() {
        let mut cloud = MockCloud::new();
        cloud.expect_get_rest_apis().times(1).returning(|| Ok(vec![]));
        cloud
            .expect_create_rest_api()
            .with(eq("ordersApi"))
            .times(1)
            .returning(|_| Ok(orders_api()));
        cloud
            .expect_create_deployment()
            .with(eq("a1b2c3"), eq("dev"))
            .times(1)
            .returning(|_, stage| {
                Ok(ApiDeployment {
                    id: "dep1".to_string(),
                    stage: stage.to_string(),
                    description: None,
                })
            });

        let action = Action::DeployApiGateway {
            api_name: "ordersApi".to_string(),
        };
        run_action(&action, &config(Stage::Dev), &cloud)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_queue_resolves_arn() {
        let mut cloud = MockCloud::new();
        cloud
            .expect_create_queue()
            .withf(|spec| spec.name == "orders")
            .times(1)
            .returning(|_| Ok("https://sqs.eu-central-1.amazonaws.com/123456789012/orders".to_string()));
        cloud
            .expect_get_queue_arn()
            .times(1)
            .returning(|_| Ok("arn:aws:sqs:eu-central-1:123456789012:orders".to_string()));

        let action = Action::CreateQueue {
            name: "orders".to_string(),
        };
        run_action(&action, &config(Stage::Dev), &cloud)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_sqs_integration_ensures_role_then_wires() {
        let mut cloud = MockCloud::new();
        cloud
            .expect_get_role()
            .with(eq("ordersApiRole"))
            .times(1)
            .returning(|name| Ok(role(name)));
        cloud
            .expect_get_rest_apis()
            .times(1)
            .returning(|| Ok(vec![orders_api()]));
        expect_wiring(&mut cloud, "POST");

        let action = Action::CreateRestApiAndSqsIntegration {
            api_name: "ordersApi".to_string(),
            queue_name: "orders".to_string(),
        };
        run_action(&action, &config(Stage::Dev), &cloud)
            .await
            .unwrap();
    }

    #[cfg(feature = "lambda-integration")]
    #[tokio::test]
    async fn test_lambda_integration_wires_and_grants_invoke() {
        let mut cloud = MockCloud::new();
        cloud
            .expect_get_rest_apis()
            .times(1)
            .returning(|| Ok(vec![orders_api()]));
        expect_wiring(&mut cloud, "GET");
        cloud
            .expect_add_invoke_permission()
            .withf(|function_name, _, principal, source_arn| {
                function_name == "report_handler"
                    && principal == "apigateway.amazonaws.com"
                    && source_arn == "arn:aws:execute-api:eu-central-1:123456789012:a1b2c3/*/GET/entry"
            })
            .times(1)
            .returning(|_, _, _, _| Ok(()));

        let action = Action::CreateGetRestApiWithLambdaIntegration {
            api_name: "ordersApi".to_string(),
            function_name: "report_handler".to_string(),
        };
        run_action(&action, &config(Stage::Dev), &cloud)
            .await
            .unwrap();
    }

    #[cfg(not(feature = "lambda-integration"))]
    #[tokio::test]
    async fn test_lambda_integration_unavailable_without_feature() {
        let cloud = MockCloud::new();

        let action = Action::CreateGetRestApiWithLambdaIntegration {
            api_name: "ordersApi".to_string(),
            function_name: "report_handler".to_string(),
        };
        let result = run_action(&action, &config(Stage::Dev), &cloud).await;

        assert_eq!(
            result.unwrap_err().to_string(),
            "Cannot wire API ordersApi to function report_handler: built without the lambda-integration feature"
        );
    }

    #[tokio::test]
    async fn test_list_failure_reaches_caller() {
        let mut cloud = MockCloud::new();
        cloud
            .expect_get_rest_apis()
            .times(1)
            .returning(|| Err(ProviderError::Throttled("GetRestApis".to_string())));

        let result = run_action(&Action::ListRestApis, &config(Stage::Dev), &cloud).await;

        assert_eq!(result.unwrap_err().to_string(), "Failed to get APIs");
    }

    #[tokio::test]
    async fn test_make_request_to_missing_api_does_not_create_it() {
        let mut cloud = MockCloud::new();
        cloud.expect_get_rest_apis().times(1).returning(|| Ok(vec![]));
        cloud.expect_create_rest_api().never();

        let action = Action::MakeApiRequest {
            api_name: "ordersApi".to_string(),
            message: "hello".to_string(),
        };
        let result = run_action(&action, &config(Stage::Dev), &cloud).await;

        assert_eq!(
            result.unwrap_err().downcast_ref::<ProviderError>(),
            Some(&ProviderError::NotFound(
                "API ordersApi does not exist".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_delete_removes_named_api() {
        let mut cloud = MockCloud::new();
        cloud
            .expect_get_rest_apis()
            .times(1)
            .returning(|| Ok(vec![orders_api()]));
        cloud
            .expect_delete_rest_api()
            .with(eq("a1b2c3"))
            .times(1)
            .returning(|_| Ok(()));

        let action = Action::DeleteApiGateway {
            api_name: "ordersApi".to_string(),
        };
        run_action(&action, &config(Stage::Dev), &cloud)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_role_for_function_reuses_existing_role() {
        let mut cloud = MockCloud::new();
        cloud
            .expect_get_role()
            .with(eq("report_handlerRole"))
            .times(1)
            .returning(|name| Ok(role(name)));
        cloud.expect_create_role().never();

        let action = Action::CreateRoleForLambdaFunction {
            function_name: "report_handler".to_string(),
        };
        run_action(&action, &config(Stage::Dev), &cloud)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_attach_policies_attaches_all_three() {
        let mut cloud = MockCloud::new();
        cloud
            .expect_attach_role_policy()
            .withf(|role_name, _| role_name == "report_handlerRole")
            .times(3)
            .returning(|_, _| Ok(()));

        let action = Action::AttachPoliciesToRole {
            role_name: "report_handlerRole".to_string(),
        };
        run_action(&action, &config(Stage::Dev), &cloud)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_function_from_image() {
        let mut cloud = MockCloud::new();
        cloud
            .expect_create_function()
            .withf(|spec| {
                spec.name == "report_handler"
                    && spec.role_arn == "arn:role"
                    && spec.code
                        == FunctionCode::Image(
                            "123456789012.dkr.ecr.eu-central-1.amazonaws.com/reports:latest"
                                .to_string(),
                        )
            })
            .times(1)
            .returning(|spec| Ok(function(&spec.name)));

        let action = Action::CreateLambdaFunction {
            function_name: "report_handler".to_string(),
            role_arn: "arn:role".to_string(),
        };
        run_action(&action, &config(Stage::Dev), &cloud)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_function_from_missing_zip_makes_no_call() {
        let cloud = MockCloud::new();

        let action = Action::CreateLambdaFunctionFromZip {
            function_name: "report_handler".to_string(),
            role_arn: "arn:role".to_string(),
            zip_path: "/nonexistent/infrawire/function.zip".to_string(),
        };
        let result = run_action(&action, &config(Stage::Dev), &cloud).await;

        assert_eq!(
            result.unwrap_err().to_string(),
            "Failed to read zip archive /nonexistent/infrawire/function.zip"
        );
    }

    #[tokio::test]
    async fn test_update_function_repoints_image() {
        let mut cloud = MockCloud::new();
        cloud
            .expect_update_function_code()
            .with(
                eq("report_handler"),
                eq("123456789012.dkr.ecr.eu-central-1.amazonaws.com/reports:latest"),
            )
            .times(1)
            .returning(|name, _| Ok(function(name)));

        let action = Action::UpdateLambdaFunction {
            function_name: "report_handler".to_string(),
        };
        run_action(&action, &config(Stage::Dev), &cloud)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_event_source_mapping_takes_one_message_at_a_time() {
        let mut cloud = MockCloud::new();
        cloud
            .expect_create_event_source_mapping()
            .withf(|spec| {
                spec.event_source_arn == "arn:aws:sqs:eu-central-1:123456789012:orders"
                    && spec.function_name == "report_handler"
                    && spec.batch_size == 1
                    && spec.enabled
            })
            .times(1)
            .returning(|_| {
                Ok(EventSourceMapping {
                    uuid: "14e0db71-5d35-4eb5-b481-8945cf9d10c2".to_string(),
                    state: None,
                })
            });

        let action = Action::CreateEventSourceMapping {
            queue_arn: "arn:aws:sqs:eu-central-1:123456789012:orders".to_string(),
            function_name: "report_handler".to_string(),
        };
        run_action(&action, &config(Stage::Dev), &cloud)
            .await
            .unwrap();
    }
}
