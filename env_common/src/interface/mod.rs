mod cloud_handlers;

pub use cloud_handlers::{
    ApiGatewayHandler, AwsCloudHandler, IamHandler, LambdaHandler, QueueHandler,
};

#[cfg(test)]
pub use cloud_handlers::{
    MockApiGatewayHandler, MockIamHandler, MockLambdaHandler, MockQueueHandler,
};
