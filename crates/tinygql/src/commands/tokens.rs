use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use std::path::PathBuf;
use tinygql_parser::lexer::QueryLexer;
use tinygql_parser::token::TokenKind;
use tinygql_parser::ParseError;

#[derive(Debug, clap::Args)]
pub(crate) struct TokensCmd {
    #[arg(
        help="Pretty-print the JSON output.",
        long,
    )]
    pretty: bool,

    #[arg(
        help="Path to the GraphQL file to tokenize.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for TokensCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match output_utils::read_source(&self.file_path).await {
            Ok(source) => source,
            Err(e) => return CommandResult::from_error(e),
        };

        // Comments are part of the dump; only the parser skips them.
        let mut lexer = QueryLexer::new(&source);
        let mut tokens = vec![];
        loop {
            match lexer.read_token() {
                Ok(token) => {
                    let is_eof = token.kind == TokenKind::Eof;
                    tokens.push(token);
                    if is_eof {
                        break;
                    }
                },
                Err(e) => {
                    return CommandResult::stderr(format_args!(
                        "{}",
                        ParseError::from(e).format_detailed(Some(source.content())),
                    ));
                },
            }
        }
        log::debug!("Lexed {} tokens from `{}`.", tokens.len(), source.name());

        match output_utils::to_json(&tokens, self.pretty) {
            Ok(json) => CommandResult::stdout(format_args!("{json}")),
            Err(e) => CommandResult::from_error(e),
        }
    }
}
