use aws_sdk_iam::Client;
use env_defs::{ProviderError, Role};
use log::info;

use crate::errors::provider_error;

fn to_role(role: Option<&aws_sdk_iam::types::Role>) -> Result<Role, ProviderError> {
    let role = role.ok_or_else(|| ProviderError::IncompleteResponse("role".to_string()))?;
    Ok(Role {
        name: role.role_name().to_string(),
        arn: role.arn().to_string(),
    })
}

/// Fails with `ProviderError::NotFound` when no role has this name.
pub async fn get_role(client: &Client, role_name: &str) -> Result<Role, ProviderError> {
    let response = client
        .get_role()
        .role_name(role_name)
        .send()
        .await
        .map_err(|e| provider_error("GetRole", e))?;
    to_role(response.role())
}

pub async fn create_role(
    client: &Client,
    role_name: &str,
    assume_role_policy_document: &str,
) -> Result<Role, ProviderError> {
    let response = client
        .create_role()
        .role_name(role_name)
        .assume_role_policy_document(assume_role_policy_document)
        .send()
        .await
        .map_err(|e| provider_error("CreateRole", e))?;
    let role = to_role(response.role())?;
    info!("Created role {} ({})", role.name, role.arn);
    Ok(role)
}

pub async fn attach_role_policy(
    client: &Client,
    role_name: &str,
    policy_arn: &str,
) -> Result<(), ProviderError> {
    client
        .attach_role_policy()
        .role_name(role_name)
        .policy_arn(policy_arn)
        .send()
        .await
        .map_err(|e| provider_error("AttachRolePolicy", e))?;
    info!("Attached policy {} to role {}", policy_arn, role_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_role_in_response() {
        assert_eq!(
            to_role(None),
            Err(ProviderError::IncompleteResponse("role".to_string()))
        );
    }
}
