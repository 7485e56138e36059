use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    /// Reports both streams, e.g. the documents that parsed alongside the
    /// diagnostics for the ones that did not.
    pub fn with_both(
        exit_code: ExitCode,
        stdout: Option<String>,
        stderr: Option<String>,
    ) -> Self {
        Self {
            exit_code,
            stderr,
            stdout,
        }
    }

    pub fn from_error(error: anyhow::Error) -> Self {
        Self::stderr(format_args!("{} {error:#}", crate::output_utils::RED_X))
    }
}
