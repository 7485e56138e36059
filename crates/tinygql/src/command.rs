use crate::Cli;
use crate::CommandResult;

/// A subcommand. Failures are reported through the returned
/// [`CommandResult`] rather than an `Err`, so every command decides its own
/// exit code and output streams.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
