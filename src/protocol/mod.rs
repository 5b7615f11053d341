//! File-based request/response protocol with the optimizer.
//!
//! The read side parses the optimizer's parameter-set documents; the
//! write side renders the fixed setup and result templates.

pub mod reader;
pub mod writer;
