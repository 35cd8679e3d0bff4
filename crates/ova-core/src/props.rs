//! Property tests over the two representations.

use proptest::prelude::*;

use crate::ops::{Arity, Op};
use crate::oracle::equivalent;
use crate::value::sentinel::SentinelValue;
use crate::value::tagged::TaggedValue;
use crate::value::LogicalValue;

fn finite() -> impl Strategy<Value = f64> {
    // proptest's f64 ranges exclude NaN and infinity
    -1.0e12f64..1.0e12f64
}

fn logical() -> impl Strategy<Value = LogicalValue> {
    prop_oneof![
        Just(LogicalValue::Undefined),
        finite().prop_map(LogicalValue::Defined),
    ]
}

proptest! {
    /// Tagged -> logical -> sentinel -> logical -> tagged is the identity.
    #[test]
    fn round_trip_identity(x in finite()) {
        let t = TaggedValue::defined(x);
        let s = SentinelValue::from(LogicalValue::from(t));
        prop_assert!(equivalent(t, s));
        let back = TaggedValue::from(LogicalValue::from(s));
        prop_assert!(equivalent(back, s));
        prop_assert_eq!(back.magnitude(), Some(x));
    }

    /// Any undefined operand makes every absorbing binary operator
    /// undefined, in both representations.
    #[test]
    fn undefined_absorption(x in logical(), left in any::<bool>()) {
        let absorbing = [
            Op::Add, Op::Sub, Op::Mul, Op::Div,
            Op::Lt, Op::Lte, Op::Gt, Op::Gte, Op::Eq, Op::Neq,
            Op::And, Op::Or, Op::Min, Op::Max,
        ];
        let u = LogicalValue::Undefined;
        let (a, b) = if left { (u, x) } else { (x, u) };
        for op in absorbing {
            let t = op.tagged().apply(a.into(), b.into(), TaggedValue::UNDEFINED);
            let s = op.sentinel().apply(a.into(), b.into(), SentinelValue::UNDEFINED);
            prop_assert!(t.is_undefined(), "tagged {} not absorbed", op.name());
            prop_assert!(s.is_undefined(), "sentinel {} not absorbed", op.name());
        }
    }

    /// Definedness tests always answer, even for undefined operands.
    #[test]
    fn definedness_tests_never_undefined(x in logical()) {
        for op in [Op::Present, Op::IsDefinedTrue, Op::IsDefinedFalse] {
            let t = op.tagged().apply(x.into(), TaggedValue::UNDEFINED, TaggedValue::UNDEFINED);
            let s = op.sentinel().apply(x.into(), SentinelValue::UNDEFINED, SentinelValue::UNDEFINED);
            prop_assert!(!t.is_undefined());
            prop_assert!(!s.is_undefined());
            prop_assert!(equivalent(t, s));
        }
    }

    /// Both representations agree on every operator for arbitrary logical
    /// operands, not just the fixed matrix.
    #[test]
    fn representations_agree(x in logical(), y in logical(), z in logical()) {
        for op in Op::ALL {
            let t = op.tagged().apply(x.into(), y.into(), z.into());
            let s = op.sentinel().apply(x.into(), y.into(), z.into());
            prop_assert!(
                equivalent(t, s),
                "{} diverged on {:?} {:?} {:?}: {:?} vs {:?}",
                op.name(), x, y, z, t, s
            );
        }
    }

    /// The sentinel representation never leaks a non-reserved NaN.
    #[test]
    fn sentinel_nan_is_always_the_reserved_pattern(x in logical(), y in logical(), z in logical()) {
        for op in Op::ALL {
            let s = op.sentinel().apply(x.into(), y.into(), z.into());
            if s.is_undefined() {
                prop_assert_eq!(s.to_bits(), crate::value::sentinel::UNDEFINED_BITS);
            }
        }
    }

    /// Arity classification matches the dispatch table.
    #[test]
    fn arity_is_consistent(byte in any::<u8>()) {
        if let Some(op) = Op::from_u8(byte) {
            prop_assert_eq!(op.arity(), op.tagged().arity());
            prop_assert!(matches!(
                op.arity(),
                Arity::Unary | Arity::Binary | Arity::Ternary
            ));
        }
    }
}
