use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::Context;
use serde::Serialize;
use tetsolve_engine::{PieceSequence, SolveStats, SolverConfig};
use tetsolve_evaluator::sequencer::Sequencer;

use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SolveArg {
    /// Text file containing piece identifiers; characters other than 1-7 are ignored
    #[arg(required = true)]
    input: Option<PathBuf>,
    /// File to write the moves to
    #[arg(required = true)]
    output: Option<PathBuf>,
    /// Solver configuration JSON file; flags below override its values
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Number of columns in the field [default: 11]
    #[arg(long)]
    width: Option<usize>,
    /// Number of pieces held back for swapping [default: 1]
    #[arg(long)]
    buffer_size: Option<usize>,
    /// Write a JSON run report to PATH, or to stdout if PATH is omitted
    #[arg(long, value_name = "PATH")]
    #[expect(clippy::option_option)]
    report: Option<Option<PathBuf>>,
}

impl SolveArg {
    fn solver_config(&self) -> anyhow::Result<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => util::read_json_file::<SolverConfig, _>("solver config", path)?,
            None => SolverConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(buffer_size) = self.buffer_size {
            config.buffer_size = buffer_size;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Serialize)]
struct RunReport<'a> {
    input: &'a Path,
    output: &'a Path,
    config: SolverConfig,
    height_bound: usize,
    final_stack_height: usize,
    elapsed_secs: f64,
    stats: &'a SolveStats,
}

pub(crate) fn run(arg: &SolveArg) -> anyhow::Result<()> {
    let (Some(input_path), Some(output_path)) = (&arg.input, &arg.output) else {
        anyhow::bail!("both INPUT and OUTPUT are required");
    };
    let config = arg.solver_config()?;

    let reader = util::open_input_file("input", input_path)?;
    let pieces = PieceSequence::from_reader(reader)
        .with_context(|| format!("Failed to read input file: {}", input_path.display()))?;
    tracing::info!(
        input = %input_path.display(),
        pieces = pieces.len(),
        width = config.width,
        buffer_size = config.buffer_size,
        "solving"
    );

    let start = Instant::now();
    let outcome = Sequencer::new(config, pieces.len())?.run(pieces.as_slice());
    let elapsed = start.elapsed();

    let mut output = Output::open(output_path.clone())?;
    outcome
        .moves()
        .write_to(&mut output)
        .with_context(|| format!("Failed to write moves to {}", output.label()))?;
    tracing::info!(
        output = %output_path.display(),
        moves = outcome.moves().len(),
        elapsed_secs = elapsed.as_secs_f64(),
        "moves written"
    );

    if let Some(report_path) = &arg.report {
        let report = RunReport {
            input: input_path,
            output: output_path,
            config,
            height_bound: config.height_bound(pieces.len()),
            final_stack_height: outcome.field().stack_height(),
            elapsed_secs: elapsed.as_secs_f64(),
            stats: outcome.stats(),
        };
        Output::save_json(&report, report_path.clone())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    #[derive(Debug, clap::Parser)]
    struct TestArgs {
        #[clap(flatten)]
        solve: SolveArg,
    }

    fn parse(args: &[&str]) -> SolveArg {
        let argv = std::iter::once("tetsolve").chain(args.iter().copied());
        TestArgs::try_parse_from(argv).unwrap().solve
    }

    #[test]
    fn test_defaults() {
        let arg = parse(&["in.txt", "out.txt"]);
        assert_eq!(arg.solver_config().unwrap(), SolverConfig::default());
        assert_eq!(arg.report, None);
    }

    #[test]
    fn test_flags_override_defaults() {
        let arg = parse(&["in.txt", "out.txt", "--width", "8", "--buffer-size", "3"]);
        assert_eq!(
            arg.solver_config().unwrap(),
            SolverConfig {
                width: 8,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_invalid_width_is_reported() {
        let arg = parse(&["in.txt", "out.txt", "--width", "70"]);
        let err = arg.solver_config().unwrap_err();
        assert!(err.to_string().contains("field width"));
    }

    #[test]
    fn test_report_path_is_optional() {
        let arg = parse(&["in.txt", "out.txt", "--report"]);
        assert_eq!(arg.report, Some(None));
        let arg = parse(&["in.txt", "out.txt", "--report", "run.json"]);
        assert_eq!(arg.report, Some(Some(PathBuf::from("run.json"))));
    }
}
