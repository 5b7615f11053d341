use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the caller. Every variant is fatal: the process
/// prints the message to stderr and exits nonzero, matching the contract
/// the optimizer expects from an external evaluator.
#[derive(Error, Debug)]
pub enum Error {
    #[error("the option --initvalues may only be used with --setup")]
    InitValuesWithoutSetup,

    #[error("no mode flag given; use --init, --finalize, --setup, --evaluate or --archive")]
    MissingMode,

    #[error("failed to read input file '{path}': {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing error on input file '{path}': {source}")]
    XmlParse {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("ill-structured input file: {0}")]
    Malformed(String),

    #[error("unexpected parameter: nVars={found} (expected {expected})")]
    UnexpectedVarCount { found: usize, expected: usize },

    #[error("inconsistent data in input file: nVars={declared}, but found {found} parameters")]
    ParameterCountMismatch { declared: usize, found: usize },

    #[error("failed to write output file '{path}': {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
