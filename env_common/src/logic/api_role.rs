use anyhow::anyhow;
use env_defs::{ProviderError, Role, RoleProfile};
use env_utils::assume_role_policy_document;
use log::{error, info};

use crate::interface::IamHandler;

/// Assumed by API Gateway to send into SQS on the caller's behalf.
pub const API_GATEWAY_ROLE: RoleProfile = RoleProfile {
    principal_service: "apigateway.amazonaws.com",
    policy_arn: "arn:aws:iam::aws:policy/AmazonSQSFullAccess",
};

pub const LAMBDA_ROLE: RoleProfile = RoleProfile {
    principal_service: "lambda.amazonaws.com",
    policy_arn: "arn:aws:iam::aws:policy/AWSLambda_FullAccess",
};

/// Attached by `attach_policies_to_role`, in this order.
pub const FUNCTION_POLICY_ARNS: &[&str] = &[
    "arn:aws:iam::aws:policy/AmazonSQSFullAccess",
    "arn:aws:iam::aws:policy/service-role/AWSLambdaBasicExecutionRole",
    "arn:aws:iam::aws:policy/AmazonS3FullAccess",
];

pub fn role_name_for(resource_name: &str) -> String {
    format!("{}Role", resource_name)
}

/// Look the role up by name and create it, with its single policy, only
/// when the lookup reports that it does not exist.
pub async fn ensure_role(
    iam: &dyn IamHandler,
    role_name: &str,
    profile: &RoleProfile,
) -> Result<Role, ProviderError> {
    match iam.get_role(role_name).await {
        Ok(role) => {
            info!("Using existing role {} ({})", role.name, role.arn);
            Ok(role)
        }
        Err(ProviderError::NotFound(_)) => {
            info!("Role {} does not exist, creating it", role_name);
            let policy_document = assume_role_policy_document(profile.principal_service);
            let role = iam.create_role(role_name, &policy_document).await?;
            iam.attach_role_policy(role_name, profile.policy_arn).await?;
            Ok(role)
        }
        Err(e) => Err(e),
    }
}

/// Attempts every attachment, then fails naming the ones that did not go through.
pub async fn attach_policies_to_role(
    iam: &dyn IamHandler,
    role_name: &str,
    policy_arns: &[&str],
) -> Result<(), anyhow::Error> {
    let mut failed = Vec::new();
    for policy_arn in policy_arns {
        match iam.attach_role_policy(role_name, policy_arn).await {
            Ok(()) => info!("Policy {} attached to role {}", policy_arn, role_name),
            Err(e) => {
                error!("Error attaching policy {} to role {}: {}", policy_arn, role_name, e);
                failed.push(policy_arn.to_string());
            }
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(anyhow!(
            "Failed to attach {} of {} policies to role {}: {}",
            failed.len(),
            policy_arns.len(),
            role_name,
            failed.join(", ")
        ))
    }
}
