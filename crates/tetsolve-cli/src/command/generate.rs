use std::path::PathBuf;

use anyhow::Context;
use rand::Rng as _;
use tetsolve_engine::{DrawMode, PieceGenerator, PieceSeed};

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    /// Output file path (stdout if omitted)
    output: Option<PathBuf>,
    /// Number of pieces to generate
    #[arg(long)]
    count: usize,
    /// 128-bit seed as 32 hex digits (random if omitted)
    #[arg(long)]
    seed: Option<PieceSeed>,
    /// Deal pieces from shuffled 7-piece bags instead of uniform draws
    #[arg(long)]
    bag: bool,
}

impl GenerateArg {
    fn draw_mode(&self) -> DrawMode {
        if self.bag {
            DrawMode::Bag
        } else {
            DrawMode::Uniform
        }
    }
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let mode = arg.draw_mode();
    let sequence = PieceGenerator::new(seed, mode).take_sequence(arg.count);

    let mut output = Output::from_output_path(arg.output.clone())?;
    sequence
        .write_to(&mut output)
        .with_context(|| format!("Failed to write pieces to {}", output.label()))?;
    tracing::info!(
        %seed,
        ?mode,
        count = sequence.len(),
        output = %output.label(),
        "piece sequence generated"
    );
    Ok(())
}
