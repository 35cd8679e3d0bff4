//! OVA Error Types
//!
//! The algebra itself is total: operators never fail. Errors exist only at
//! the construction and harness boundaries.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum OvaError {
    /// A defined value was requested for a NaN or infinite magnitude.
    #[error("non-finite magnitude for a defined value: {0}")]
    NonFiniteMagnitude(f64),

    /// An operator name did not match any known operator.
    #[error("unknown operator name: {0}")]
    UnknownOperator(String),
}

pub type OvaResult<T> = Result<T, OvaError>;
