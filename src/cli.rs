use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::OutputParamType;

#[derive(Parser, Debug)]
#[command(
    name = "ruleout",
    about = "Inspect the output parameters of a rule execution",
    version
)]
pub struct Cli {
    /// Config file (defaults to ./ruleout.toml when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every output parameter of a result file.
    Render {
        /// JSON-lines file of {"name", "kind", "value"} objects, or `-` for stdin.
        file: PathBuf,
        /// Only print parameters of this kind (e.g. STRING, QUERY_OUT).
        #[arg(long)]
        kind: Option<OutputParamType>,
        #[arg(long)]
        json: bool,
    },
    /// Print a single output parameter by name.
    Show {
        file: PathBuf,
        name: String,
        /// Print the plain diagnostic form instead of the styled view.
        #[arg(long, conflicts_with = "json")]
        diagnostic: bool,
        #[arg(long)]
        json: bool,
    },
    /// List the recognized output parameter kinds.
    Kinds {
        #[arg(long)]
        json: bool,
    },
}
