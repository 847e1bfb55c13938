use serde_json::json;

/// Trust policy letting `principal_service` assume the role.
pub fn assume_role_policy_document(principal_service: &str) -> String {
    json!({
        "Version": "2012-10-17",
        "Statement": [
            {
                "Effect": "Allow",
                "Principal": { "Service": principal_service },
                "Action": "sts:AssumeRole"
            }
        ]
    })
    .to_string()
}
