use anyhow::Result;
use env_common::{
    logic::{attach_policies_to_role, create_role_for_function, FUNCTION_POLICY_ARNS},
    IamHandler,
};
use log::info;

pub async fn handle_create_role_for_function(
    iam: &dyn IamHandler,
    function_name: &str,
) -> Result<()> {
    let role = create_role_for_function(iam, function_name).await?;
    println!("Role name: {}", role.name);
    println!("Role ARN: {}", role.arn);
    Ok(())
}

pub async fn handle_attach_policies(iam: &dyn IamHandler, role_name: &str) -> Result<()> {
    attach_policies_to_role(iam, role_name, FUNCTION_POLICY_ARNS).await?;
    info!("All policies attached to role {}", role_name);
    for policy_arn in FUNCTION_POLICY_ARNS {
        println!("Attached {}", policy_arn);
    }
    Ok(())
}
