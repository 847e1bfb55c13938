pub mod interface;
pub mod logic;

pub use interface::{
    ApiGatewayHandler, AwsCloudHandler, IamHandler, LambdaHandler, QueueHandler,
};
