//! Errors reported by the triangulator.
//!
//! Only precondition failures are errors. A stalled scan is a partial result
//! (`TriangulationStatus::Stalled`), not an error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangulateError {
    #[error("polygon needs at least 3 vertices, got {len}")]
    TooFewPoints { len: usize },
    #[error("vertex {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}
