use std::ffi::OsString;

use clap::builder::NonEmptyStringValueParser;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "infrawire")]
#[command(version = env!("APP_VERSION"))]
#[command(about = "Provision and wire API Gateway, IAM, Lambda and SQS resources", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub action: Option<Action>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Action {
    /// Create an SQS queue and print its URL and ARN
    #[command(name = "createQueue")]
    CreateQueue {
        #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
        name: String,
    },
    /// Create (or reuse) a REST API and route POST /entry into an SQS queue
    #[command(name = "createRestApiAndSQSIntegration")]
    CreateRestApiAndSqsIntegration {
        #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
        api_name: String,
        #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
        queue_name: String,
    },
    /// Create (or reuse) a REST API and proxy GET /entry to a Lambda function
    #[command(name = "createGetRestApiWithLambdaIntegration")]
    CreateGetRestApiWithLambdaIntegration {
        #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
        api_name: String,
        #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
        function_name: String,
    },
    /// List all REST APIs in the region
    #[command(name = "listRestApis")]
    ListRestApis,
    /// Deploy a REST API to the configured stage, creating it if missing
    #[command(name = "deployApiGateway")]
    DeployApiGateway {
        #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
        api_name: String,
    },
    /// POST a message to the entry path of a deployed REST API
    #[command(name = "makeApiRequest")]
    MakeApiRequest {
        #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
        api_name: String,
        #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
        message: String,
    },
    /// Delete a REST API by name
    #[command(name = "deleteApiGateway")]
    DeleteApiGateway {
        #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
        api_name: String,
    },
    /// Get or create the execution role of a function
    #[command(name = "createRoleForLambdaFunction")]
    CreateRoleForLambdaFunction {
        #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
        function_name: String,
    },
    /// Attach the SQS, basic execution and S3 policies to a role
    #[command(name = "attachPoliciesToRole")]
    AttachPoliciesToRole {
        #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
        role_name: String,
    },
    /// Create a function from the configured ECR image
    #[command(name = "createLambdaFunction")]
    CreateLambdaFunction {
        #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
        function_name: String,
        #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
        role_arn: String,
    },
    /// Create a function from a local zip archive containing a `bootstrap` binary
    #[command(name = "createLambdaFunctionFromZip")]
    CreateLambdaFunctionFromZip {
        #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
        function_name: String,
        #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
        role_arn: String,
        #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
        zip_path: String,
    },
    /// Point a function at the latest configured ECR image
    #[command(name = "updateLambdaFunction")]
    UpdateLambdaFunction {
        #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
        function_name: String,
    },
    /// Feed messages from a queue into a function, one at a time
    #[command(name = "createEventSourceMapping")]
    CreateEventSourceMapping {
        #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
        queue_arn: String,
        #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
        function_name: String,
    },
}

impl Action {
    /// The name the action is invoked by on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Action::CreateQueue { .. } => "createQueue",
            Action::CreateRestApiAndSqsIntegration { .. } => "createRestApiAndSQSIntegration",
            Action::CreateGetRestApiWithLambdaIntegration { .. } => {
                "createGetRestApiWithLambdaIntegration"
            }
            Action::ListRestApis => "listRestApis",
            Action::DeployApiGateway { .. } => "deployApiGateway",
            Action::MakeApiRequest { .. } => "makeApiRequest",
            Action::DeleteApiGateway { .. } => "deleteApiGateway",
            Action::CreateRoleForLambdaFunction { .. } => "createRoleForLambdaFunction",
            Action::AttachPoliciesToRole { .. } => "attachPoliciesToRole",
            Action::CreateLambdaFunction { .. } => "createLambdaFunction",
            Action::CreateLambdaFunctionFromZip { .. } => "createLambdaFunctionFromZip",
            Action::UpdateLambdaFunction { .. } => "updateLambdaFunction",
            Action::CreateEventSourceMapping { .. } => "createEventSourceMapping",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// No action, `help`, or an action nobody knows: show usage and succeed
    Usage,
    Version,
    Run(Action),
}

/// Parse the process arguments (program name first). Missing or empty
/// positionals come back as the clap error. Positionals are free text, so
/// values starting with `-` are taken as they are.
pub fn parse_args<I, T>(args: I) -> Result<ParsedCommand, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(Cli { action: Some(action) }) => Ok(ParsedCommand::Run(action)),
        Ok(Cli { action: None }) => Ok(ParsedCommand::Usage),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            | ErrorKind::InvalidSubcommand => Ok(ParsedCommand::Usage),
            ErrorKind::DisplayVersion => Ok(ParsedCommand::Version),
            _ => Err(e),
        },
    }
}
