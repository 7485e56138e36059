use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use tinygql_parser::ast::QueryDocument;
use tinygql_parser::SourceInput;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ParseCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Pretty-print the JSON output.",
        long,
    )]
    pretty: bool,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be parsed.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// One line of output for a file that parsed.
#[derive(serde::Serialize)]
struct ParsedFile<'a> {
    source: &'a str,
    document: &'a QueryDocument,
}

/// What came of parsing one file: its JSON, or a rendered diagnostic.
type FileOutcome = Result<String, String>;

#[inherent::inherent]
impl RunnableCommand for ParseCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<String> = vec![];

        let file_paths = self.find_graphql_files(&mut errors);
        log::debug!(
            "Found {} GraphQL files to be parsed.",
            file_paths.len(),
        );

        let mut sources = Vec::with_capacity(file_paths.len());
        for path in &file_paths {
            match output_utils::read_source(path).await {
                Ok(source) => sources.push(source),
                Err(e) => errors.push(format!("{} {e:#}", output_utils::RED_X)),
            }
        }

        let pretty = self.pretty;
        let outcomes: Vec<FileOutcome> =
            sources.par_iter()
                .map(|source| parse_one(source, pretty))
                .collect();

        let num_parsed = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
        let mut documents = vec![];
        for outcome in outcomes {
            match outcome {
                Ok(json) => documents.push(json),
                Err(diagnostic) => errors.push(diagnostic),
            }
        }

        let stdout = (!documents.is_empty()).then(|| documents.join("\n"));
        if errors.is_empty() {
            log::info!(
                "{} Parsed {num_parsed} GraphQL files.",
                output_utils::GREEN_CHECK,
            );
            return CommandResult::with_both(ExitCode::SUCCESS, stdout, None);
        }

        let num_errors = errors.len();
        errors.push(format!(
            "{} Parsed {num_parsed} GraphQL files; {num_errors} failed.",
            output_utils::RED_X,
        ));
        CommandResult::with_both(ExitCode::FAILURE, stdout, Some(errors.join("\n")))
    }
}

impl ParseCmd {
    /// Finds all GraphQL files recursively located at or under each path
    /// passed as an arg. Filesystem errors are recorded in `errors`.
    fn find_graphql_files(&self, errors: &mut Vec<String>) -> Vec<PathBuf> {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                match entry {
                    Ok(entry) => {
                        let entry_path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {entry_path:#?}.");
                            continue;
                        }
                        log::trace!("Found file at {entry_path:#?}.");
                        if has_graphql_ext(entry_path, &graphql_file_exts) {
                            file_paths.push(entry_path.to_path_buf());
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(format!("{} {e}", output_utils::RED_X));
                    },
                }
            }
        }

        // A lone file argument is parsed even when its extension isn't one
        // of `graphql_file_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to parse {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.to_owned());
        }

        file_paths
    }
}

fn has_graphql_ext(path: &Path, graphql_file_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .is_some_and(|ext| graphql_file_exts.contains(ext.as_ref()))
}

fn parse_one(source: &SourceInput, pretty: bool) -> FileOutcome {
    let result = tinygql_parser::parse_query(source);
    let Some(document) = result.valid_ast() else {
        return Err(result.format_error(Some(source.content())).unwrap_or_default());
    };

    let parsed = ParsedFile {
        source: source.name(),
        document,
    };
    output_utils::to_json(&parsed, pretty)
        .map_err(|e| format!("{} {}: {e:#}", output_utils::RED_X, source.name()))
}
