//! Optional Value Algebra - Core Library
//!
//! An algebra of optional real numbers: values that are either defined
//! (a finite f64 magnitude) or undefined (absent). Two interchangeable
//! representations implement the identical operator set: one with an
//! explicit undefined flag, one encoding "undefined" as a reserved NaN
//! bit pattern. A conformance suite proves they agree.

pub mod error;
pub mod ops;
pub mod oracle;
pub mod suite;
pub mod value;

// Re-export commonly used types
pub use error::{OvaError, OvaResult};
pub use ops::{Arity, Op, OpFn};
pub use oracle::{equivalent, Divergence};
pub use suite::{default_matrix, ConformanceReport, ConformanceSuite, MatrixRow};
pub use value::sentinel::SentinelValue;
pub use value::tagged::TaggedValue;
pub use value::LogicalValue;

#[cfg(test)]
mod props;
