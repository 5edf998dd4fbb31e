//! Error type for closest-pair queries.

use std::fmt;

/// Errors from the closest-pair entry points.
///
/// Validation happens once, before recursion begins; internal stages
/// assume validated input and have no failure modes of their own.
/// Degenerate geometry (coincident or collinear points) is valid input,
/// not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PairError {
    /// Fewer than two points were supplied; the closest pair is
    /// undefined for empty and single-point inputs.
    NotEnoughPoints {
        /// Number of points actually supplied.
        count: usize,
    },
}

impl fmt::Display for PairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughPoints { count } => {
                write!(f, "closest pair needs at least 2 points, got {count}")
            }
        }
    }
}

impl std::error::Error for PairError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_count() {
        let err = PairError::NotEnoughPoints { count: 1 };
        assert_eq!(err.to_string(), "closest pair needs at least 2 points, got 1");
    }
}
