//! Evalbridge - file-based external evaluator stub for optimization frameworks.
//!
//! An optimizer drives this program one mode per invocation: it asks for an
//! initial problem description (`--setup`), hands over a parameter set to
//! score (`--evaluate`), asks for results to be stored (`--archive`), or
//! calls the lifecycle hooks (`--init`, `--finalize`). All data crosses the
//! process boundary as XML files; there is no daemon and no state survives
//! an invocation.
//!
//! The shipped objective is a placeholder 4-D paraboloid. The crate is a
//! template: swap the [`domain::objective::Objective`] implementation for a
//! call into a real simulation and keep the protocol code as-is.
//!
//! # Modules
//!
//! - [`cli`] - Command-line definitions and mode resolution
//! - [`domain`] - Parameter sets, result records, the objective seam
//! - [`protocol`] - XML read/write adapters for the optimizer protocol
//! - [`app`] - Mode dispatch
//! - [`error`] - Error types for the crate

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod protocol;
