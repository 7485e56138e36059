mod fmt;
mod parse;
mod tokens;

use crate::Cli;
use crate::CommandResult;
use fmt::FmtCmd;
use parse::ParseCmd;
use tokens::TokensCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "tinygql")]
pub(crate) enum CommandEnum {
    /// Print the canonical text of a GraphQL query document.
    Fmt(FmtCmd),

    /// Parse GraphQL query documents and print their syntax trees as JSON.
    Parse(Box<ParseCmd>),

    /// Print the token stream of a GraphQL file as JSON.
    Tokens(TokensCmd),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Fmt(cmd) => cmd.run(cli).await,
            Self::Parse(cmd) => cmd.run(cli).await,
            Self::Tokens(cmd) => cmd.run(cli).await,
        }
    }
}
