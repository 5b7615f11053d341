//! Core types exchanged with the optimizer.

pub mod objective;
pub mod parameter;
pub mod record;

pub use objective::{Objective, Paraboloid};
pub use parameter::{
    InitMode, ParameterSet, LOWER_BOUNDARY, N_VARS, UNKNOWN_ID, UNKNOWN_ITERATION,
    UPPER_BOUNDARY,
};
pub use record::ResultRecord;
