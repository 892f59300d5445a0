//! CLI commands for t3composer.

pub mod bundles;
pub mod clean;
pub mod constraint;
pub mod form;
pub mod packages;
pub mod purge;
pub mod require;
pub mod validate;

use anyhow::{Context as _, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use t3composer_core::{Submission, from_json};

/// t3composer - compose TYPO3 Composer requirements
///
/// Describes the version selector and package form of the TYPO3 Composer
/// helper, checks selected packages against the chosen major version and
/// renders the resulting requirements.
#[derive(Parser, Debug)]
#[command(name = "t3composer")]
#[command(author = "TYPO3 Contributors")]
#[command(version)]
#[command(about = "Compose TYPO3 Composer requirements", long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
#[command(styles = get_styles())]
pub struct Cli {
    /// Do not output any message
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Use the specified configuration file
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Use the specified directory as working directory
    #[arg(short = 'd', long = "working-dir", global = true, value_name = "DIR")]
    pub working_dir: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Increase the verbosity of messages: -v for verbose, -vv for very verbose, -vvv for debug
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Convert to context args
    pub fn to_context_args(&self) -> crate::context::ContextArgs {
        crate::context::ContextArgs {
            config: self.config.clone(),
            working_dir: self.working_dir.clone(),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Describe the helper form: version selector and package checkboxes
    Form(form::FormArgs),

    /// List catalog packages and the major versions they support
    Packages(packages::PackagesArgs),

    /// List package bundles with their form field identifiers
    Bundles(bundles::BundlesArgs),

    /// Build the Composer constraint for a release version
    Constraint(constraint::ConstraintArgs),

    /// Remove packages the submitted version cannot install
    Clean(clean::CleanArgs),

    /// Render the requirements of a submission
    Require(require::RequireArgs),

    /// Show the cache tags purged for a major version
    Purge(purge::PurgeArgs),

    /// Validate the configured release data
    Validate(validate::ValidateArgs),
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format
    Json,
}

/// Submitted form values, shared by `clean` and `require`.
#[derive(Args, Debug, Clone, Default)]
pub struct SubmissionArgs {
    /// Submitted fields as FIELD=VALUE (e.g. typo3_version=^12.4 typo3-cms-core=1)
    #[arg(value_name = "FIELD=VALUE")]
    pub fields: Vec<String>,

    /// Read a JSON object of submitted fields from FILE ("-" for stdin)
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl SubmissionArgs {
    /// Build the submission. Pairs override fields read from the input file.
    pub fn submission(&self) -> Result<Submission> {
        let mut submission = match &self.input {
            Some(path) => {
                let content = read_input(path)?;
                from_json::<Submission>(&content)
                    .with_context(|| format!("reading submission from {}", path.display()))?
            }
            None => Submission::new(),
        };

        for (name, value) in Submission::from_pairs(&self.fields)?.iter() {
            submission.insert(name, value.clone());
        }
        Ok(submission)
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("reading submission from stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(path).map_err(|e| t3composer_core::Error::io(path, e).into())
}

/// Get clap styles for colored help
const fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .header(clap::builder::styling::AnsiColor::Green.on_default().bold())
        .usage(clap::builder::styling::AnsiColor::Green.on_default().bold())
        .literal(clap::builder::styling::AnsiColor::Cyan.on_default())
        .placeholder(clap::builder::styling::AnsiColor::Yellow.on_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use t3composer_core::FieldValue;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn pairs_override_input_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"typo3_version":"^11","typo3-cms-core":true}}"#).unwrap();

        let args = SubmissionArgs {
            fields: vec!["typo3_version=^12.4".to_string()],
            input: Some(file.path().to_path_buf()),
        };
        let submission = args.submission().unwrap();

        let names: Vec<_> = submission.names().collect();
        assert_eq!(names, vec!["typo3_version", "typo3-cms-core"]);
        assert_eq!(
            submission.get("typo3_version"),
            Some(&FieldValue::from("^12.4"))
        );
    }

    #[test]
    fn missing_input_file_is_an_io_error() {
        let args = SubmissionArgs {
            fields: Vec::new(),
            input: Some(PathBuf::from("/nonexistent/submission.json")),
        };
        let err = args.submission().unwrap_err();
        let core = err.downcast_ref::<t3composer_core::Error>().unwrap();
        assert_eq!(core.code(), t3composer_core::ErrorCode::E0501);
    }
}
