//! Command-line argument parsing for the snapshot CLI.

use crate::orchestrator::GenerationStrategy;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Generate snapshots for a topic
    Generate {
        topic: String,
        /// Overrides the configured strategy when set
        strategy: Option<GenerationStrategy>,
        verbose: bool,
    },
    /// Arguments could not be understood
    Invalid(String),
}

pub const USAGE: &str = "\
Usage: snapshot [OPTIONS] <TOPIC>...

Generate short learning snapshots for a topic.

Options:
      --multi      Use the multi-call pipeline (overview, areas, explanations)
      --single     Use the single-call JSON pipeline
  -v, --verbose    Debug logging on stderr
  -V, --version    Print version
  -h, --help       Print help

Environment:
  SNAPSHOT_API_KEY (or GEMINI_API_KEY), SNAPSHOT_MODEL, SNAPSHOT_BASE_URL,
  SNAPSHOT_STRATEGY, SNAPSHOT_TIMEOUT_SECS, SNAPSHOT_LOG";

/// Parse command-line arguments and return the appropriate command.
///
/// Topic words are joined with single spaces. Everything after `--` is topic,
/// so `snapshot -- ""` requests an empty topic.
///
/// # Examples
///
/// ```
/// use snapshot::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["snapshot".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut words: Vec<String> = Vec::new();
    let mut strategy = None;
    let mut verbose = false;
    let mut only_words = false;

    // Skip the program name
    for arg in args.skip(1) {
        if only_words {
            words.push(arg);
            continue;
        }
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--multi" => strategy = Some(GenerationStrategy::MultiCall),
            "--single" => strategy = Some(GenerationStrategy::SingleCall),
            "--verbose" | "-v" => verbose = true,
            "--" => only_words = true,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return CliCommand::Invalid(format!("unknown option '{}'", flag));
            }
            _ => words.push(arg),
        }
    }

    if words.is_empty() {
        return CliCommand::Help;
    }

    CliCommand::Generate {
        topic: words.join(" "),
        strategy,
        verbose,
    }
}
