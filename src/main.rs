use anyhow::Result;
use clap::Parser;
use ruleout::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    ruleout::run(cli)
}
