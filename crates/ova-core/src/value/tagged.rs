//! Tagged Representation
//!
//! An explicit defined/undefined flag beside an f64 magnitude. This is the
//! reference representation; the equivalence oracle treats it as ground
//! truth when checking the sentinel representation.

use crate::error::{OvaError, OvaResult};

use super::LogicalValue;

/// Optional real carrying an explicit undefined flag
#[derive(Debug, Clone, Copy)]
pub struct TaggedValue {
    magnitude: f64,
    undefined: bool,
}

impl TaggedValue {
    /// The undefined value. The magnitude is conventionally zero and is
    /// never inspected by any operator.
    pub const UNDEFINED: TaggedValue = TaggedValue { magnitude: 0.0, undefined: true };

    /// Build a defined value from a magnitude the caller knows is finite.
    /// Untrusted input goes through `TryFrom<f64>` instead.
    pub fn defined(magnitude: f64) -> Self {
        TaggedValue { magnitude, undefined: false }
    }

    pub fn is_undefined(&self) -> bool {
        self.undefined
    }

    /// Magnitude of a defined value, `None` when undefined
    pub fn magnitude(&self) -> Option<f64> {
        if self.undefined {
            None
        } else {
            Some(self.magnitude)
        }
    }

    /// Raw flag/magnitude pair, for diagnostics only
    pub fn raw_parts(&self) -> (f64, bool) {
        (self.magnitude, self.undefined)
    }

    fn bool_value(b: bool) -> Self {
        TaggedValue::defined(if b { 1.0 } else { 0.0 })
    }

    fn truthy(&self) -> bool {
        self.magnitude != 0.0
    }

    fn unary(self, f: impl FnOnce(f64) -> f64) -> Self {
        if self.undefined {
            TaggedValue::UNDEFINED
        } else {
            TaggedValue::defined(f(self.magnitude))
        }
    }

    fn binary(self, rhs: Self, f: impl FnOnce(f64, f64) -> f64) -> Self {
        if self.undefined || rhs.undefined {
            TaggedValue::UNDEFINED
        } else {
            TaggedValue::defined(f(self.magnitude, rhs.magnitude))
        }
    }

    fn compare(self, rhs: Self, f: impl FnOnce(f64, f64) -> bool) -> Self {
        if self.undefined || rhs.undefined {
            TaggedValue::UNDEFINED
        } else {
            TaggedValue::bool_value(f(self.magnitude, rhs.magnitude))
        }
    }

    // Arithmetic

    pub fn add(self, rhs: Self) -> Self {
        self.binary(rhs, |a, b| a + b)
    }

    pub fn sub(self, rhs: Self) -> Self {
        self.binary(rhs, |a, b| a - b)
    }

    pub fn mul(self, rhs: Self) -> Self {
        self.binary(rhs, |a, b| a * b)
    }

    /// Division. A defined zero divisor yields undefined; the IEEE divide
    /// never runs against zero, so neither representation can observe
    /// infinity or 0/0 here.
    pub fn div(self, rhs: Self) -> Self {
        if self.undefined || rhs.undefined || rhs.magnitude == 0.0 {
            TaggedValue::UNDEFINED
        } else {
            TaggedValue::defined(self.magnitude / rhs.magnitude)
        }
    }

    pub fn neg(self) -> Self {
        self.unary(|a| -a)
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

    // Boolean logic. Strict three-valued semantics: both operands are
    // always evaluated and any undefined operand makes the result
    // undefined. A defined magnitude is truthy iff nonzero.

    pub fn and(self, rhs: Self) -> Self {
        self.compare(rhs, |a, b| a != 0.0 && b != 0.0)
    }

    pub fn or(self, rhs: Self) -> Self {
        self.compare(rhs, |a, b| a != 0.0 || b != 0.0)
    }

    pub fn not(self) -> Self {
        if self.undefined {
            TaggedValue::UNDEFINED
        } else {
            TaggedValue::bool_value(!self.truthy())
        }
    }

    // Utility

    pub fn min(self, rhs: Self) -> Self {
        self.binary(rhs, f64::min)
    }

    pub fn max(self, rhs: Self) -> Self {
        self.binary(rhs, f64::max)
    }

    /// "Is this value defined?"; never undefined
    pub fn present(self) -> Self {
        TaggedValue::bool_value(!self.undefined)
    }

    /// "Is this a defined zero?"; undefined propagates, so an absent value
    /// stays distinguishable from a defined zero
    pub fn null(self) -> Self {
        if self.undefined {
            TaggedValue::UNDEFINED
        } else {
            TaggedValue::bool_value(self.magnitude == 0.0)
        }
    }

    pub fn round(self) -> Self {
        self.unary(f64::round)
    }

    pub fn floor(self) -> Self {
        self.unary(f64::floor)
    }

    /// Ternary select. An undefined condition is undefined; otherwise the
    /// chosen branch passes through unchanged, undefined or not.
    pub fn cond(self, then: Self, alt: Self) -> Self {
        if self.undefined {
            TaggedValue::UNDEFINED
        } else if self.truthy() {
            then
        } else {
            alt
        }
    }

    /// Defined and truthy; never undefined
    pub fn is_defined_true(self) -> Self {
        TaggedValue::bool_value(!self.undefined && self.truthy())
    }

    /// Defined and falsy; never undefined
    pub fn is_defined_false(self) -> Self {
        TaggedValue::bool_value(!self.undefined && !self.truthy())
    }
}

impl From<LogicalValue> for TaggedValue {
    fn from(value: LogicalValue) -> Self {
        match value {
            LogicalValue::Undefined => TaggedValue::UNDEFINED,
            LogicalValue::Defined(x) => TaggedValue::defined(x),
        }
    }
}

impl From<TaggedValue> for LogicalValue {
    fn from(value: TaggedValue) -> Self {
        match value.magnitude() {
            None => LogicalValue::Undefined,
            Some(x) => LogicalValue::Defined(x),
        }
    }
}

impl TryFrom<f64> for TaggedValue {
    type Error = OvaError;

    fn try_from(magnitude: f64) -> OvaResult<Self> {
        if !magnitude.is_finite() {
            return Err(OvaError::NonFiniteMagnitude(magnitude));
        }
        Ok(TaggedValue::defined(magnitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_absorbs_arithmetic() {
        let u = TaggedValue::UNDEFINED;
        let one = TaggedValue::defined(1.0);
        assert!(u.add(one).is_undefined());
        assert!(one.sub(u).is_undefined());
        assert!(u.mul(u).is_undefined());
        assert!(u.neg().is_undefined());
    }

    #[test]
    fn defined_arithmetic() {
        let a = TaggedValue::defined(1.6);
        let b = TaggedValue::defined(1.0);
        assert_eq!(a.add(b).magnitude(), Some(2.6));
        assert_eq!(a.sub(b).magnitude(), Some(1.6 - 1.0));
        assert_eq!(a.neg().magnitude(), Some(-1.6));
    }

    #[test]
    fn division_by_defined_zero_is_undefined() {
        let a = TaggedValue::defined(1.6);
        let zero = TaggedValue::defined(0.0);
        assert!(a.div(zero).is_undefined());
        assert!(zero.div(zero).is_undefined());
        assert_eq!(a.div(TaggedValue::defined(2.0)).magnitude(), Some(0.8));
    }

    #[test]
    fn comparisons_are_boolean_valued() {
        let zero = TaggedValue::defined(0.0);
        let one = TaggedValue::defined(1.0);
        assert_eq!(zero.eq(one).magnitude(), Some(0.0));
        assert_eq!(zero.lt(one).magnitude(), Some(1.0));
        assert_eq!(zero.neq(one).magnitude(), Some(1.0));
        assert!(zero.gte(TaggedValue::UNDEFINED).is_undefined());
    }

    #[test]
    fn boolean_logic_strict() {
        let zero = TaggedValue::defined(0.0);
        let one = TaggedValue::defined(1.0);
        let u = TaggedValue::UNDEFINED;
        assert_eq!(one.and(one).magnitude(), Some(1.0));
        assert_eq!(one.and(zero).magnitude(), Some(0.0));
        // no Kleene rescue: false AND undefined is still undefined
        assert!(zero.and(u).is_undefined());
        assert!(one.or(u).is_undefined());
        assert_eq!(zero.not().magnitude(), Some(1.0));
        assert_eq!(one.not().magnitude(), Some(0.0));
        assert!(u.not().is_undefined());
    }

    #[test]
    fn present_and_null() {
        let u = TaggedValue::UNDEFINED;
        let zero = TaggedValue::defined(0.0);
        let x = TaggedValue::defined(1.6);
        assert_eq!(u.present().magnitude(), Some(0.0));
        assert_eq!(zero.present().magnitude(), Some(1.0));
        assert!(u.null().is_undefined());
        assert_eq!(zero.null().magnitude(), Some(1.0));
        assert_eq!(x.null().magnitude(), Some(0.0));
    }

    #[test]
    fn cond_selects_without_inspecting_branches() {
        let u = TaggedValue::UNDEFINED;
        let one = TaggedValue::defined(1.0);
        let two = TaggedValue::defined(2.0);
        assert!(u.cond(one, two).is_undefined());
        assert_eq!(one.cond(two, one).magnitude(), Some(2.0));
        assert_eq!(TaggedValue::defined(0.0).cond(two, one).magnitude(), Some(1.0));
        // a selected undefined branch passes through
        assert!(one.cond(u, two).is_undefined());
    }

    #[test]
    fn defined_truthiness_tests_never_undefined() {
        let u = TaggedValue::UNDEFINED;
        let zero = TaggedValue::defined(0.0);
        let one = TaggedValue::defined(1.0);
        assert_eq!(u.is_defined_true().magnitude(), Some(0.0));
        assert_eq!(one.is_defined_true().magnitude(), Some(1.0));
        assert_eq!(zero.is_defined_true().magnitude(), Some(0.0));
        assert_eq!(u.is_defined_false().magnitude(), Some(0.0));
        assert_eq!(zero.is_defined_false().magnitude(), Some(1.0));
        assert_eq!(one.is_defined_false().magnitude(), Some(0.0));
    }

    #[test]
    fn rounding() {
        assert_eq!(TaggedValue::defined(1.6).round().magnitude(), Some(2.0));
        assert_eq!(TaggedValue::defined(-1.5).round().magnitude(), Some(-2.0));
        assert_eq!(TaggedValue::defined(1.6).floor().magnitude(), Some(1.0));
        assert!(TaggedValue::UNDEFINED.round().is_undefined());
    }

    #[test]
    fn try_from_rejects_non_finite() {
        assert!(TaggedValue::try_from(1.5).is_ok());
        assert!(TaggedValue::try_from(f64::NAN).is_err());
        assert!(TaggedValue::try_from(f64::INFINITY).is_err());
    }
}
