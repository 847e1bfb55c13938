use std::process::exit;

use clap::CommandFactory;
use cli::{parse_args, run_action, Cli, ParsedCommand};
use env_common::AwsCloudHandler;
use env_utils::{setup_logging, ProvisionerConfig};
use log::{error, info};

fn print_usage() {
    if let Err(e) = Cli::command().print_help() {
        error!("Failed to print usage: {}", e);
    }
    println!();
}

#[tokio::main]
async fn main() {
    if let Err(e) = setup_logging() {
        eprintln!("Failed to set up logging: {}", e);
    }

    // Environment is validated before anything else, including `help`
    let config = match ProvisionerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            exit(1);
        }
    };

    let action = match parse_args(std::env::args_os()) {
        Ok(ParsedCommand::Run(action)) => action,
        Ok(ParsedCommand::Usage) => {
            print_usage();
            return;
        }
        Ok(ParsedCommand::Version) => {
            println!("infrawire {}", env!("APP_VERSION"));
            return;
        }
        Err(e) => {
            if let Err(print_error) = e.print() {
                error!("Failed to print argument error: {}", print_error);
            }
            exit(2);
        }
    };

    info!(
        "Running {} against {} in {} (stage {})",
        action.name(),
        config.account_id,
        config.region,
        config.stage
    );
    let cloud = AwsCloudHandler::new(&config.region).await;

    if let Err(e) = run_action(&action, &config, &cloud).await {
        error!(
            "Problem encountered performing action \"{}\": {:#}",
            action.name(),
            e
        );
        exit(1);
    }
}
