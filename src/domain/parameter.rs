//! Parameter-set types and the fixed problem geometry.

use clap::ValueEnum;

/// Number of decision variables in the fixed problem setup.
pub const N_VARS: usize = 4;

/// Lower bound shared by every decision variable.
pub const LOWER_BOUNDARY: f64 = -10.0;

/// Upper bound shared by every decision variable.
pub const UPPER_BOUNDARY: f64 = 10.0;

/// Iteration reported when the input file carries none.
pub const UNKNOWN_ITERATION: i64 = -1;

/// Id reported when the input file carries none.
pub const UNKNOWN_ID: &str = "UNKNOWN_ID";

/// The tuple of decision variables for one evaluation, as handed over by
/// the optimizer.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    /// Optimizer iteration this set belongs to.
    pub iteration: i64,
    /// Free-form identifier assigned by the optimizer.
    pub id: String,
    /// The decision variables, in document order.
    pub values: [f64; N_VARS],
}

/// Initial-value policy for a freshly written setup document.
///
/// `Random` does not draw numbers here: the document carries the flag and
/// the optimizer performs the actual randomization within the boundaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum InitMode {
    /// Start every variable at the lower boundary.
    Min,
    /// Start every variable at the upper boundary.
    Max,
    /// Let the optimizer randomize the start values.
    #[default]
    Random,
}

impl InitMode {
    /// Value every variable starts from under this policy.
    #[must_use]
    pub const fn initial_value(self) -> f64 {
        match self {
            Self::Min => LOWER_BOUNDARY,
            Self::Max => UPPER_BOUNDARY,
            Self::Random => 0.0,
        }
    }

    /// Whether the consumer of the setup file should randomize the values.
    #[must_use]
    pub const fn randomize(self) -> bool {
        matches!(self, Self::Random)
    }
}
