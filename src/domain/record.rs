//! Result records handed back to the optimizer.

/// The computed objective value plus bookkeeping fields for one
/// parameter set.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    /// Iteration echoed from the evaluated parameter set.
    pub iteration: i64,
    /// Id echoed from the evaluated parameter set.
    pub id: String,
    /// The single raw objective value.
    pub raw_result: f64,
    /// Whether the result may be used by the optimizer.
    pub is_valid: bool,
    /// Whether the individual still needs re-evaluation.
    pub is_dirty: bool,
}

impl ResultRecord {
    /// Build a record for a freshly computed result.
    ///
    /// This evaluator never marks a result invalid or dirty, so the flags
    /// are fixed at construction.
    pub fn new(iteration: i64, id: impl Into<String>, raw_result: f64) -> Self {
        Self {
            iteration,
            id: id.into(),
            raw_result,
            is_valid: true,
            is_dirty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_carries_fixed_validity_flags() {
        let record = ResultRecord::new(3, "ind-3", 30.0);
        assert_eq!(record.iteration, 3);
        assert_eq!(record.id, "ind-3");
        assert_eq!(record.raw_result, 30.0);
        assert!(record.is_valid);
        assert!(!record.is_dirty);
    }
}
