use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct FmtCmd {
    #[arg(
        help="Path to the GraphQL query document to format.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for FmtCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match output_utils::read_source(&self.file_path).await {
            Ok(source) => source,
            Err(e) => return CommandResult::from_error(e),
        };

        let result = tinygql_parser::parse_query(&source);
        match result.valid_ast() {
            Some(doc) => CommandResult::stdout(format_args!("{doc}")),
            None => CommandResult::stderr(format_args!(
                "{}",
                result.format_error(Some(source.content())).unwrap_or_default(),
            )),
        }
    }
}
