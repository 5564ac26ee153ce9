//! Command-line argument definitions using clap.
//!
//! Each argument struct converts into a core parameter type with `From`, so
//! clap attributes and help text stay out of `coachplan-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Template Registry
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use coachplan_core::params::ShowTemplate;

/// Coachplan turns plan templates into validated answers and model prompts
///
/// Templates describe multi-step questionnaires for workout and nutrition
/// plans. The CLI lists and checks templates, validates answer files against
/// them and builds the payload and prompt sent for plan creation. `serve`
/// exposes the same operations over MCP for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "coachplan")]
pub struct Args {
    /// Directory with additional `*.json` templates. Defaults to
    /// $XDG_DATA_HOME/coachplan/templates
    #[arg(long, global = true)]
    pub template_dir: Option<PathBuf>,

    /// Do not load the built-in workout and nutrition templates
    #[arg(long, global = true)]
    pub no_builtins: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect plan templates
    #[command(alias = "t")]
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },
    /// Work with answer files
    #[command(alias = "a")]
    Answers {
        #[command(subcommand)]
        command: AnswerCommands,
    },
    /// Start the MCP server
    Serve,
}

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// List the latest version of every template
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a template with all its steps and fields
    #[command(alias = "s")]
    Show(ShowTemplateArgs),
    /// Load a template file and run the schema check
    #[command(alias = "c")]
    Check(CheckTemplateArgs),
}

#[derive(Subcommand)]
pub enum AnswerCommands {
    /// Validate answers against a template
    #[command(alias = "v")]
    Validate(AnswerArgs),
    /// Print the filtered answer payload as JSON
    #[command(alias = "p")]
    Payload(AnswerArgs),
    /// Print the system and user prompt built from the answers
    Prompt(AnswerArgs),
    /// Run the full submission flow and print the submission as JSON
    Submit(AnswerArgs),
}

/// Show a template
#[derive(ClapArgs)]
pub struct ShowTemplateArgs {
    /// Template id, e.g. "workout"
    pub id: String,
    /// Exact version to show; the latest version by default
    #[arg(short, long)]
    pub version: Option<u32>,
}

impl From<ShowTemplateArgs> for ShowTemplate {
    fn from(val: ShowTemplateArgs) -> Self {
        ShowTemplate {
            id: val.id,
            version: val.version,
        }
    }
}

/// Check a template file
#[derive(ClapArgs)]
pub struct CheckTemplateArgs {
    /// Path to the template JSON file
    pub file: PathBuf,
}

/// Answers to run against a template
///
/// The answer file holds a single JSON object keyed by field key. The
/// conversion into `AnswerSet` happens in the command handler, after the
/// file has been read.
#[derive(ClapArgs)]
pub struct AnswerArgs {
    /// Template id the answers belong to
    pub id: String,
    /// JSON file with the answers
    #[arg(short, long)]
    pub answers: PathBuf,
    /// Template version; the latest version by default
    #[arg(short, long)]
    pub version: Option<u32>,
    /// Only validate the fields of this wizard step
    #[arg(short, long)]
    pub step: Option<u32>,
}
