//! Domain error types.
//!
//! These errors represent validation failures on the raw tokens that make
//! up a network description. They are distinct from load and query errors.

/// Domain-level errors for identifier validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Station identifier is not a non-negative integer
    #[error("invalid station id: {0:?}")]
    InvalidStationId(String),

    /// Line identifier is empty or contains non-word characters
    #[error("invalid line id: {0:?}")]
    InvalidLineId(String),

    /// Edge weight is zero or not an integer
    #[error("invalid edge weight: {0:?}")]
    InvalidWeight(String),
}
