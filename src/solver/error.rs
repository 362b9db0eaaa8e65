use super::Case;

/// Every way solving or querying a triangle can fail.
///
/// Failures are reported at the point they are detected; no partially
/// solved triangle is ever handed out alongside an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolveError {
    #[error("under-specified: {given} measurement(s) given with {sides} side(s); need 3 including at least one side")]
    UnderSpecified { given: usize, sides: usize },
    #[error("over-specified: {given} measurements given, need exactly 3")]
    OverSpecified { given: usize },
    #[error("unknown measurement label {0:?}")]
    UnknownSlot(String),
    #[error("{label:?} (={value}) must be > 0")]
    NonPositiveValue { label: String, value: f64 },
    #[error("{label:?} (={value}) must be finite")]
    NonFiniteValue { label: String, value: f64 },
    #[error("angle {label:?} (={value}) must be < π")]
    AngleOutOfRange { label: String, value: f64 },
    #[error("sides {sides:?} fail the triangle inequality")]
    TriangleInequalityViolated { sides: [f64; 3] },
    #[error("no angle solution for {label:?}")]
    NoAngleSolution { label: String },
    #[error("ambiguous: two triangles satisfy the specification; supply a filter")]
    AmbiguousSolution,
    #[error("{}", filter_failure_message(.accepted))]
    FilterResolutionFailure { accepted: usize },
    #[error("expected a {expected:?} specification, got {found:?}")]
    InvalidCase { expected: Case, found: Case },
    #[error("invalid slot labels: {0}")]
    InvalidLabels(String),
}

fn filter_failure_message(accepted: &usize) -> String {
    if *accepted == 0 {
        "no acceptable solution".to_owned()
    } else {
        format!("filter did not disambiguate ({accepted} solutions accepted)")
    }
}
