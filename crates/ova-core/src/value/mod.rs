//! Logical Value Domain
//!
//! Defines the abstract optional-real domain shared by both concrete
//! representations. A logical value is either absent or a finite magnitude;
//! NaN and infinity are representation artifacts, not domain values.

pub mod sentinel;
pub mod tagged;

use serde::Serialize;

use crate::error::{OvaError, OvaResult};

/// Abstract optional real number
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LogicalValue {
    /// Absence of a value
    Undefined,

    /// A finite magnitude
    Defined(f64),
}

impl LogicalValue {
    /// Build a defined value, rejecting non-finite magnitudes
    pub fn defined(magnitude: f64) -> OvaResult<Self> {
        if !magnitude.is_finite() {
            return Err(OvaError::NonFiniteMagnitude(magnitude));
        }
        Ok(LogicalValue::Defined(magnitude))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, LogicalValue::Undefined)
    }
}
