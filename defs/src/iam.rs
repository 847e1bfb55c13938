use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Role {
    pub name: String,
    pub arn: String,
}

/// Trust principal and the single managed policy attached when a role is first created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleProfile {
    pub principal_service: &'static str,
    pub policy_arn: &'static str,
}
