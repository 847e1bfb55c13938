// ARNs, integration URIs and endpoints derived from account, region and resource names.

/// API Gateway service integration path for sending to an SQS queue.
pub fn sqs_integration_uri(region: &str, account_id: &str, queue_name: &str) -> String {
    format!(
        "arn:aws:apigateway:{}:sqs:path/{}/{}",
        region, account_id, queue_name
    )
}

fn lambda_function_arn(region: &str, account_id: &str, function_name: &str) -> String {
    format!(
        "arn:aws:lambda:{}:{}:function:{}",
        region, account_id, function_name
    )
}

/// API Gateway invocation path for a Lambda proxy integration.
pub fn lambda_integration_uri(region: &str, account_id: &str, function_name: &str) -> String {
    format!(
        "arn:aws:apigateway:{}:lambda:path/2015-03-31/functions/{}/invocations",
        region,
        lambda_function_arn(region, account_id, function_name)
    )
}

/// Source ARN matching every stage of one method on one path of an API.
pub fn execute_api_source_arn(
    region: &str,
    account_id: &str,
    api_id: &str,
    http_method: &str,
    path_part: &str,
) -> String {
    format!(
        "arn:aws:execute-api:{}:{}:{}/*/{}/{}",
        region, account_id, api_id, http_method, path_part
    )
}

pub(crate) fn ecr_image_uri(account_id: &str, region: &str, repository: &str) -> String {
    format!(
        "{}.dkr.ecr.{}.amazonaws.com/{}:latest",
        account_id, region, repository
    )
}

pub fn invoke_url(api_id: &str, region: &str, stage: &str, path_part: &str) -> String {
    format!(
        "https://{}.execute-api.{}.amazonaws.com/{}/{}",
        api_id, region, stage, path_part
    )
}
