//! Error types for pattern composition.

use thiserror::Error;

/// An operation called with arguments outside its documented contract.
///
/// These are only recorded when the composer runs in strict mode. The
/// rendered text is the same either way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ArgumentViolation {
    /// A bounded repetition whose lower bound exceeds its upper bound.
    #[error("inverted repetition range {{{from},{to}}} on `{expression}`")]
    InvertedRange {
        /// Expression the repetition was applied to.
        expression: String,
        /// Lower bound.
        from: u32,
        /// Upper bound.
        to: u32,
    },

    /// An alternation with no choices.
    #[error("alternation requires at least one choice")]
    EmptyAlternation,
}

/// Errors that can occur when rendering a composed pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// One or more operations were called with out-of-contract arguments.
    #[error("{} invalid argument(s), first: {}", .0.len(), first_violation(.0))]
    InvalidArguments(Vec<ArgumentViolation>),
}

fn first_violation(violations: &[ArgumentViolation]) -> String {
    violations
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// Result type for pattern composition.
pub type ComposeResult<T> = std::result::Result<T, ComposeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_inverted_range() {
        let err = ArgumentViolation::InvertedRange {
            expression: "hello".to_string(),
            from: 6,
            to: 3,
        };
        assert_eq!(err.to_string(), "inverted repetition range {6,3} on `hello`");
    }

    #[test]
    fn test_display_empty_alternation() {
        let err = ArgumentViolation::EmptyAlternation;
        assert_eq!(err.to_string(), "alternation requires at least one choice");
    }

    #[test]
    fn test_display_invalid_arguments() {
        let err = ComposeError::InvalidArguments(vec![
            ArgumentViolation::EmptyAlternation,
            ArgumentViolation::InvertedRange {
                expression: "a".to_string(),
                from: 2,
                to: 1,
            },
        ]);
        assert_eq!(
            err.to_string(),
            "2 invalid argument(s), first: alternation requires at least one choice"
        );
    }
}
