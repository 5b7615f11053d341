//! Command-line interface definitions.
//!
//! The optimizer drives this program with mutually-exclusive mode flags
//! rather than subcommands; the flag surface below is the contract the
//! caller is built against, so it stays flat.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::domain::InitMode;
use crate::error::{Error, Result};

/// File-based external evaluator stub for optimization frameworks
#[derive(Parser, Debug)]
#[command(name = "evalbridge")]
#[command(version, about, long_about = None)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["init", "finalize", "setup", "evaluate", "archive"])
))]
pub struct Cli {
    /// Perform initialization work
    #[arg(long)]
    pub init: bool,

    /// Perform finalization work
    #[arg(long)]
    pub finalize: bool,

    /// Provide the problem setup data to the caller
    #[arg(long)]
    pub setup: bool,

    /// Evaluate the parameters from the input file
    #[arg(long)]
    pub evaluate: bool,

    /// Archive the results for the parameters from the input file
    #[arg(long)]
    pub archive: bool,

    /// Start with the given initial values (only valid with --setup)
    #[arg(long, value_enum)]
    pub initvalues: Option<InitMode>,

    /// Read the input data from the given file
    #[arg(long, value_name = "IN_FILE", default_value = "input.xml")]
    pub input: PathBuf,

    /// Write the results to the given file
    #[arg(long, value_name = "OUT_FILE", default_value = "output.xml")]
    pub output: PathBuf,
}

/// A fully validated invocation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Init,
    Finalize,
    Setup { initvalues: InitMode },
    Evaluate,
    Archive,
}

impl Cli {
    /// Resolve the mode flags into exactly one operation.
    ///
    /// Clap already enforces that the mode flags are mutually exclusive
    /// and that one is present; this adds the cross-flag rule clap cannot
    /// express (`--initvalues` belongs to `--setup`).
    pub fn mode(&self) -> Result<Mode> {
        if self.initvalues.is_some() && !self.setup {
            return Err(Error::InitValuesWithoutSetup);
        }
        if self.init {
            Ok(Mode::Init)
        } else if self.finalize {
            Ok(Mode::Finalize)
        } else if self.setup {
            Ok(Mode::Setup {
                initvalues: self.initvalues.unwrap_or_default(),
            })
        } else if self.evaluate {
            Ok(Mode::Evaluate)
        } else if self.archive {
            Ok(Mode::Archive)
        } else {
            Err(Error::MissingMode)
        }
    }
}
