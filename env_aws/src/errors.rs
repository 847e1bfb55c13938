use aws_smithy_runtime_api::client::result::SdkError;
use aws_smithy_types::error::display::DisplayErrorContext;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;
use env_defs::ProviderError;
use log::debug;

const NOT_FOUND_CODES: &[&str] = &[
    "NoSuchEntity",
    "NotFoundException",
    "ResourceNotFoundException",
    "AWS.SimpleQueueService.NonExistentQueue",
    "QueueDoesNotExist",
];

const CONFLICT_CODES: &[&str] = &[
    "EntityAlreadyExists",
    "ConflictException",
    "ResourceConflictException",
    "QueueAlreadyExists",
    "QueueNameExists",
];

const PERMISSION_CODES: &[&str] = &[
    "AccessDenied",
    "AccessDeniedException",
    "UnauthorizedException",
    "UnrecognizedClientException",
    "InvalidClientTokenId",
    "ExpiredToken",
    "ExpiredTokenException",
];

const THROTTLING_CODES: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "TooManyRequestsException",
    "RequestThrottled",
    "RequestLimitExceeded",
];

/// Map a provider error code onto the error taxonomy the provisioning logic branches on.
pub fn classify_error_code(code: Option<&str>, message: String) -> ProviderError {
    match code {
        Some(code) if NOT_FOUND_CODES.contains(&code) => ProviderError::NotFound(message),
        Some(code) if CONFLICT_CODES.contains(&code) => ProviderError::Conflict(message),
        Some(code) if PERMISSION_CODES.contains(&code) => ProviderError::PermissionDenied(message),
        Some(code) if THROTTLING_CODES.contains(&code) => ProviderError::Throttled(message),
        _ => ProviderError::Other(message),
    }
}

pub(crate) fn provider_error<E, R>(operation: &str, err: SdkError<E, R>) -> ProviderError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let code = err
        .as_service_error()
        .and_then(|service_error| service_error.code())
        .map(str::to_string);
    debug!("{} failed with error code {:?}", operation, code);
    let message = format!("{} failed: {}", operation, DisplayErrorContext(&err));
    classify_error_code(code.as_deref(), message)
}
