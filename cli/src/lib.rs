mod args;
mod commands;

pub use args::{parse_args, Action, Cli, ParsedCommand};
pub use commands::run_action;
