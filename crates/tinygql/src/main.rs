mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    let Some(command) = cli.cmd.take() else {
        return match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{} {e:#}", output_utils::RED_X);
                std::process::ExitCode::FAILURE
            },
        };
    };

    let result = command.run(cli).await;
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}")
    }
    result.exit_code
}

fn setup_logger(cli: &Cli) {
    let mut level_warning = None;
    let log_level =
        if cli.verbose {
            tracing::Level::DEBUG
        } else {
            match std::env::var("LOG_LEVEL") {
                Ok(value) => parse_log_level(&value).unwrap_or_else(|warning| {
                    level_warning = Some(warning);
                    DEFAULT_LOG_LEVEL
                }),
                Err(_) => DEFAULT_LOG_LEVEL,
            }
        };

    // Logs share stderr with diagnostics; stdout carries command output only.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging level set to `{log_level}`.");

    if let Some(warning) = level_warning {
        log::warn!("{warning}");
    }
}

/// Maps a `LOG_LEVEL` value to a tracing level. `verbose` is an alias for
/// `debug`.
fn parse_log_level(value: &str) -> Result<tracing::Level, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(tracing::Level::TRACE),
        "debug" | "verbose" => Ok(tracing::Level::DEBUG),
        "info" => Ok(tracing::Level::INFO),
        other => Err(format!(
            "Invalid `LOG_LEVEL` environment variable value: `{other}` \
            (expected one of `trace`, `debug`, `verbose`, `info`)"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_log_level;

    #[test]
    fn log_level_names() {
        assert_eq!(parse_log_level("trace"), Ok(tracing::Level::TRACE));
        assert_eq!(parse_log_level(" DEBUG\n"), Ok(tracing::Level::DEBUG));
        assert_eq!(parse_log_level("verbose"), Ok(tracing::Level::DEBUG));
        assert_eq!(parse_log_level("Info"), Ok(tracing::Level::INFO));
    }

    #[test]
    fn invalid_log_level_is_reported() {
        let warning = parse_log_level("loud").unwrap_err();
        assert!(warning.contains("`loud`"));
    }
}
