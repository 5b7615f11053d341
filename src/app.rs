//! Mode dispatch: one invocation performs exactly one operation and exits.

use std::path::Path;

use tracing::info;

use crate::cli::{Cli, Mode};
use crate::domain::{InitMode, Objective, Paraboloid};
use crate::error::Result;
use crate::protocol::{reader, writer};

/// Run the mode selected on the command line.
pub fn run(cli: &Cli) -> Result<()> {
    match cli.mode()? {
        Mode::Init => init(),
        Mode::Finalize => finalize(),
        Mode::Setup { initvalues } => setup(&cli.output, initvalues),
        Mode::Evaluate => evaluate(&cli.input, &cli.output),
        Mode::Archive => archive(&cli.input),
    }
}

/// Hook for setting up the optimization environment. Nothing to do in
/// this template.
fn init() -> Result<()> {
    println!("Initializing the optimization environment...");
    Ok(())
}

/// Hook for tearing down the optimization environment. Nothing to do in
/// this template.
fn finalize() -> Result<()> {
    println!("Cleaning up the optimization environment...");
    Ok(())
}

fn setup(output: &Path, initvalues: InitMode) -> Result<()> {
    writer::write_setup(output, initvalues)
}

fn evaluate(input: &Path, output: &Path) -> Result<()> {
    let params = reader::read_parameter_set(input)?;
    let record = Paraboloid.evaluate(&params);
    info!(
        iteration = record.iteration,
        id = %record.id,
        result = record.raw_result,
        "evaluated parameter set"
    );
    writer::write_result(output, &record)
}

/// Same read and compute as [`evaluate`], but the record is handed to a
/// storage hook instead of the output file. A real evaluator would write
/// it to a database or results directory; the template discards it.
fn archive(input: &Path) -> Result<()> {
    let params = reader::read_parameter_set(input)?;
    let record = Paraboloid.evaluate(&params);
    info!(
        iteration = record.iteration,
        id = %record.id,
        "archiving the results"
    );
    println!("Archiving the results...");
    Ok(())
}
