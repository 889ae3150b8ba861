//!
//! Errors of the assignment solver
//!
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HungarianError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HungarianError {
    /// The cost matrix is not square, or its rows have different lengths.
    #[error("cost matrix must be square: it has {rows} rows but row {row} has {columns} columns")]
    Shape {
        rows: usize,
        row: usize,
        columns: usize,
    },
    /// A cell of the cost matrix is NaN or infinite.
    #[error("cost matrix has a non-finite entry at ({row}, {column})")]
    NonFinite { row: usize, column: usize },
    /// The assignment given to `total_cost` is not a permutation of the matrix size.
    #[error("invalid assignment: {0}")]
    InvalidAssignment(String),
    /// An entry went out of the range of the cost type.
    #[error("cost overflowed while {0}")]
    Overflow(&'static str),
    /// A step that always succeeds on a valid matrix has failed.
    /// This is a bug of the solver, and no assignment is returned.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}
