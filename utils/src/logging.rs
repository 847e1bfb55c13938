use std::env;

use chrono::Local;
use log::LevelFilter;

fn level_from(value: Option<&str>) -> LevelFilter {
    match value {
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("warn") => LevelFilter::Warn,
        Some("error") => LevelFilter::Error,
        _ => LevelFilter::Warn, // Default to Warn if variable is unset or has an unrecognized value
    }
}

/// Route `log` records to stderr so stdout only carries action results.
pub fn setup_logging() -> Result<(), fern::InitError> {
    let level = level_from(env::var("LOG_LEVEL").ok().as_deref());

    let stderr_config = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}: {}",
                Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        // The SDK's own crates are chatty at debug
        .level_for("aws_smithy_runtime", LevelFilter::Warn)
        .level_for("aws_config", LevelFilter::Warn)
        .level_for("hyper", LevelFilter::Warn)
        .chain(std::io::stderr());

    fern::Dispatch::new().chain(stderr_config).apply()?;

    Ok(())
}
