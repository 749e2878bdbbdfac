pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod helpers;
pub mod logging;
pub mod models;
pub mod output;
pub mod reader;

use anyhow::Result;

use cli::{Cli, Commands};
use config::Config;

pub use error::{ParameterError, ResultSetError};
pub use models::{OutputParamType, RawParameter, ResultParameter, RuleExecResult};

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    logging::init(&config.log_filter);
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Render { file, kind, json } => {
            let result = commands::render::run(&file, kind)?;
            output::result_set(&result, json || config.json)
        }
        Commands::Show {
            file,
            name,
            diagnostic,
            json,
        } => {
            let param = commands::show::run(&file, &name)?;
            if diagnostic {
                output::diagnostic(&param)
            } else {
                output::parameter(&param, json || config.json)
            }
        }
        Commands::Kinds { json } => output::kinds(json || config.json),
    }
}
