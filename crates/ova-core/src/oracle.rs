//! Equivalence Oracle
//!
//! Decides whether a tagged value and a sentinel value denote the same
//! logical value, and records a diagnostic when they do not. Diagnostics
//! are data for offline triage; they never steer control flow.

use serde::Serialize;

use crate::value::sentinel::SentinelValue;
use crate::value::tagged::TaggedValue;
use crate::value::LogicalValue;

/// True iff both values denote the same logical value: both undefined, or
/// both defined with equal magnitudes under ordinary f64 equality (so
/// `-0.0` and `0.0` agree).
pub fn equivalent(tagged: TaggedValue, sentinel: SentinelValue) -> bool {
    match (tagged.magnitude(), sentinel.magnitude()) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// One detected disagreement between the representations
#[derive(Debug, Clone, Serialize)]
pub struct Divergence {
    /// Operator under check, or "convert" for row conversion checks
    pub op: &'static str,
    /// Index of the input row in the test matrix
    pub row: usize,
    /// Raw tagged representation
    pub tagged_magnitude: f64,
    pub tagged_undefined: bool,
    /// Raw sentinel representation (`sentinel_value` is NaN for the
    /// reserved pattern, so the exact bits ride along)
    pub sentinel_value: f64,
    pub sentinel_bits: u64,
    /// Decoded logical interpretations
    pub tagged_logical: LogicalValue,
    pub sentinel_logical: LogicalValue,
    /// Whether the suite was told to expect this operator to diverge
    pub expected: bool,
}

impl Divergence {
    pub fn new(op: &'static str, row: usize, tagged: TaggedValue, sentinel: SentinelValue) -> Self {
        let (tagged_magnitude, tagged_undefined) = tagged.raw_parts();
        Divergence {
            op,
            row,
            tagged_magnitude,
            tagged_undefined,
            sentinel_value: sentinel.raw(),
            sentinel_bits: sentinel.to_bits(),
            tagged_logical: tagged.into(),
            sentinel_logical: sentinel.into(),
            expected: false,
        }
    }
}
