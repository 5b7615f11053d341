//! The objective function seam.
//!
//! This is the one piece end users are expected to replace: a real
//! deployment swaps [`Paraboloid`] for a type that shells out to a
//! simulation or solver, leaving the surrounding protocol code untouched.

use crate::domain::{ParameterSet, ResultRecord};

/// A user-supplied objective function.
pub trait Objective {
    /// Score one parameter set, producing exactly one result record.
    fn evaluate(&self, params: &ParameterSet) -> ResultRecord;
}

/// Placeholder objective: a 4-D parabola with its minimum at the origin.
#[derive(Debug, Default)]
pub struct Paraboloid;

impl Objective for Paraboloid {
    fn evaluate(&self, params: &ParameterSet) -> ResultRecord {
        let sum: f64 = params.values.iter().map(|v| v * v).sum();
        ResultRecord::new(params.iteration, params.id.clone(), sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(values: [f64; 4]) -> ParameterSet {
        ParameterSet {
            iteration: 7,
            id: "test".to_string(),
            values,
        }
    }

    #[test]
    fn paraboloid_sums_squares() {
        let record = Paraboloid.evaluate(&params([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(record.raw_result, 30.0);
    }

    #[test]
    fn paraboloid_is_zero_at_origin() {
        let record = Paraboloid.evaluate(&params([0.0; 4]));
        assert_eq!(record.raw_result, 0.0);
    }

    #[test]
    fn paraboloid_is_sign_invariant() {
        let pos = Paraboloid.evaluate(&params([1.5, 2.5, 3.5, 4.5]));
        let neg = Paraboloid.evaluate(&params([-1.5, -2.5, -3.5, -4.5]));
        assert_eq!(pos.raw_result, neg.raw_result);
    }

    #[test]
    fn paraboloid_echoes_iteration_and_id() {
        let record = Paraboloid.evaluate(&params([0.0; 4]));
        assert_eq!(record.iteration, 7);
        assert_eq!(record.id, "test");
    }
}
