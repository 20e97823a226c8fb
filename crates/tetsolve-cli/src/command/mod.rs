use clap::{Parser, Subcommand};

use self::{generate::GenerateArg, solve::SolveArg};

mod generate;
mod solve;

/// Places a sequence of falling pieces on a fixed-width field.
///
/// Reads piece identifiers (digits 1-7) from INPUT and writes one
/// "piece rotation column" line per piece to OUTPUT.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about,
    long_about = None,
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Option<Mode>,
    #[clap(flatten)]
    solve: SolveArg,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Generate a random piece sequence file
    Generate(#[clap(flatten)] GenerateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Some(Mode::Generate(arg)) => generate::run(&arg)?,
        None => solve::run(&args.solve)?,
    }
    Ok(())
}
