//! Sentinel Representation
//!
//! A bare f64 in which one reserved quiet-NaN bit pattern means
//! "undefined". Arithmetic leans on IEEE NaN propagation; every operator
//! result is purified so the only NaN a `SentinelValue` can ever hold is
//! the reserved pattern. Comparisons, boolean logic and min/max cannot rely
//! on propagation (IEEE compares NaN as unordered-false, and f64::min/max
//! prefer the non-NaN operand), so those test for the sentinel explicitly.

use crate::error::{OvaError, OvaResult};

use super::LogicalValue;

/// Bit pattern reserved for "undefined": the canonical quiet NaN
pub const UNDEFINED_BITS: u64 = 0x7FF8_0000_0000_0000;

/// Optional real encoding "undefined" as a reserved NaN pattern
#[derive(Debug, Clone, Copy)]
pub struct SentinelValue(f64);

/// Collapse any NaN onto the reserved pattern
fn purify(magnitude: f64) -> f64 {
    if magnitude.is_nan() {
        f64::from_bits(UNDEFINED_BITS)
    } else {
        magnitude
    }
}

impl SentinelValue {
    /// The undefined value: exactly the reserved bit pattern
    pub const UNDEFINED: SentinelValue = SentinelValue(f64::from_bits(UNDEFINED_BITS));

    /// Build a defined value from a magnitude the caller knows is finite.
    /// Untrusted input goes through `TryFrom<f64>` instead.
    pub fn defined(magnitude: f64) -> Self {
        SentinelValue(purify(magnitude))
    }

    /// Wrap a raw IEEE result, purifying incidental NaNs
    fn from_ieee(magnitude: f64) -> Self {
        SentinelValue(purify(magnitude))
    }

    pub fn is_undefined(&self) -> bool {
        // purification guarantees the only reachable NaN is the sentinel
        self.0.is_nan()
    }

    /// Magnitude of a defined value, `None` when undefined
    pub fn magnitude(&self) -> Option<f64> {
        if self.is_undefined() {
            None
        } else {
            Some(self.0)
        }
    }

    /// Raw bit pattern, for diagnostics only
    pub fn to_bits(&self) -> u64 {
        self.0.to_bits()
    }

    /// Raw f64, for diagnostics only
    pub fn raw(&self) -> f64 {
        self.0
    }

    fn bool_value(b: bool) -> Self {
        SentinelValue(if b { 1.0 } else { 0.0 })
    }

    fn compare(self, rhs: Self, f: impl FnOnce(f64, f64) -> bool) -> Self {
        // undefined first: `f` would silently see NaN as unordered-false
        if self.is_undefined() || rhs.is_undefined() {
            SentinelValue::UNDEFINED
        } else {
            SentinelValue::bool_value(f(self.0, rhs.0))
        }
    }

    // Arithmetic rides on NaN propagation: an undefined operand poisons the
    // IEEE result, and from_ieee canonicalizes it back to the sentinel.

    pub fn add(self, rhs: Self) -> Self {
        SentinelValue::from_ieee(self.0 + rhs.0)
    }

    pub fn sub(self, rhs: Self) -> Self {
        SentinelValue::from_ieee(self.0 - rhs.0)
    }

    pub fn mul(self, rhs: Self) -> Self {
        SentinelValue::from_ieee(self.0 * rhs.0)
    }

    /// Division. A defined zero divisor yields undefined, checked before
    /// the IEEE divide; an undefined divisor compares unequal to zero and
    /// poisons the quotient as usual.
    pub fn div(self, rhs: Self) -> Self {
        if rhs.0 == 0.0 {
            SentinelValue::UNDEFINED
        } else {
            SentinelValue::from_ieee(self.0 / rhs.0)
        }
    }

    pub fn neg(self) -> Self {
        SentinelValue::from_ieee(-self.0)
    }

    // Comparison (boolean-valued, undefined-propagating)

    pub fn lt(self, rhs: Self) -> Self {
        self.compare(rhs, |a, b| a < b)
    }

    pub fn lte(self, rhs: Self) -> Self {
        self.compare(rhs, |a, b| a <= b)
    }

    pub fn gt(self, rhs: Self) -> Self {
        self.compare(rhs, |a, b| a > b)
    }

    pub fn gte(self, rhs: Self) -> Self {
        self.compare(rhs, |a, b| a >= b)
    }

    pub fn eq(self, rhs: Self) -> Self {
        self.compare(rhs, |a, b| a == b)
    }

    pub fn neq(self, rhs: Self) -> Self {
        self.compare(rhs, |a, b| a != b)
    }

    // Boolean logic, strict three-valued semantics as in the tagged
    // representation

    pub fn and(self, rhs: Self) -> Self {
        self.compare(rhs, |a, b| a != 0.0 && b != 0.0)
    }

    pub fn or(self, rhs: Self) -> Self {
        self.compare(rhs, |a, b| a != 0.0 || b != 0.0)
    }

    /// Logical negation. The undefined test must come first: `NaN == 0.0`
    /// is false, so a bare truthiness check would negate an undefined
    /// operand into a defined true.
    pub fn not(self) -> Self {
        if self.is_undefined() {
            SentinelValue::UNDEFINED
        } else {
            SentinelValue::bool_value(self.0 == 0.0)
        }
    }

    // Utility

    pub fn min(self, rhs: Self) -> Self {
        // f64::min(NaN, x) returns x, which would drop the undefined
        if self.is_undefined() || rhs.is_undefined() {
            SentinelValue::UNDEFINED
        } else {
            SentinelValue(self.0.min(rhs.0))
        }
    }

    pub fn max(self, rhs: Self) -> Self {
        if self.is_undefined() || rhs.is_undefined() {
            SentinelValue::UNDEFINED
        } else {
            SentinelValue(self.0.max(rhs.0))
        }
    }

    /// "Is this value defined?"; never undefined
    pub fn present(self) -> Self {
        SentinelValue::bool_value(!self.is_undefined())
    }

    /// "Is this a defined zero?"; undefined propagates
    pub fn null(self) -> Self {
        if self.is_undefined() {
            SentinelValue::UNDEFINED
        } else {
            SentinelValue::bool_value(self.0 == 0.0)
        }
    }

    pub fn round(self) -> Self {
        SentinelValue::from_ieee(self.0.round())
    }

    pub fn floor(self) -> Self {
        SentinelValue::from_ieee(self.0.floor())
    }

    /// Ternary select, mirroring the tagged contract
    pub fn cond(self, then: Self, alt: Self) -> Self {
        if self.is_undefined() {
            SentinelValue::UNDEFINED
        } else if self.0 != 0.0 {
            then
        } else {
            alt
        }
    }

    /// Defined and truthy; never undefined
    pub fn is_defined_true(self) -> Self {
        SentinelValue::bool_value(!self.is_undefined() && self.0 != 0.0)
    }

    /// Defined and falsy; never undefined
    pub fn is_defined_false(self) -> Self {
        SentinelValue::bool_value(!self.is_undefined() && self.0 == 0.0)
    }
}

impl From<LogicalValue> for SentinelValue {
    fn from(value: LogicalValue) -> Self {
        match value {
            LogicalValue::Undefined => SentinelValue::UNDEFINED,
            LogicalValue::Defined(x) => SentinelValue::defined(x),
        }
    }
}

impl From<SentinelValue> for LogicalValue {
    fn from(value: SentinelValue) -> Self {
        match value.magnitude() {
            None => LogicalValue::Undefined,
            Some(x) => LogicalValue::Defined(x),
        }
    }
}

impl TryFrom<f64> for SentinelValue {
    type Error = OvaError;

    fn try_from(magnitude: f64) -> OvaResult<Self> {
        if !magnitude.is_finite() {
            return Err(OvaError::NonFiniteMagnitude(magnitude));
        }
        Ok(SentinelValue(magnitude))
    }
}
