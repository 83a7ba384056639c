use clap::{Parser, Subcommand};

use self::{duel::DuelArg, generate_pool::GeneratePoolArg, practice::PracticeArg};

mod duel;
mod generate_pool;
mod practice;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Generate an opponent pool and write it as a JSON table
    GeneratePool(#[clap(flatten)] GeneratePoolArg),
    /// Evaluate a strategy against a stored opponent pool
    Practice(#[clap(flatten)] PracticeArg),
    /// Resolve a single match between two strategies
    Duel(#[clap(flatten)] DuelArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::GeneratePool(arg) => generate_pool::run(&arg)?,
        Mode::Practice(arg) => practice::run(&arg)?,
        Mode::Duel(arg) => duel::run(&arg)?,
    }
    Ok(())
}
