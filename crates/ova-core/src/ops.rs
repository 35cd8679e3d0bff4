//! Operator Identifiers
//!
//! Names the operator set once, independent of representation, and maps
//! each identifier to the corresponding operator of each representation.
//! The conformance suite iterates `Op::ALL` so both representations always
//! run the same named operator. Discriminant values are a stable contract.

use crate::error::{OvaError, OvaResult};
use crate::value::sentinel::SentinelValue;
use crate::value::tagged::TaggedValue;

/// Operator identifiers
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    // Arithmetic
    Add = 0x01,
    Sub = 0x02,
    Mul = 0x03,
    Div = 0x04,
    Neg = 0x05,

    // Comparison
    Lt  = 0x10,
    Lte = 0x11,
    Gt  = 0x12,
    Gte = 0x13,
    Eq  = 0x14,
    Neq = 0x15,

    // Boolean logic
    And = 0x20,
    Or  = 0x21,
    Not = 0x22,

    // Utility
    Min     = 0x30,
    Max     = 0x31,
    Present = 0x32,
    Null    = 0x33,
    Round   = 0x34,
    Floor   = 0x35,
    Cond    = 0x36,

    // Definedness tests
    IsDefinedTrue  = 0x40,
    IsDefinedFalse = 0x41,
}

/// Operator argument count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
    Ternary,
}

/// One representation's realization of an operator
#[derive(Clone, Copy)]
pub enum OpFn<T> {
    Unary(fn(T) -> T),
    Binary(fn(T, T) -> T),
    Ternary(fn(T, T, T) -> T),
}

impl<T: Copy> OpFn<T> {
    pub fn arity(&self) -> Arity {
        match self {
            OpFn::Unary(_) => Arity::Unary,
            OpFn::Binary(_) => Arity::Binary,
            OpFn::Ternary(_) => Arity::Ternary,
        }
    }

    /// Apply to up to three operands; unary and binary operators ignore
    /// the trailing ones
    pub fn apply(&self, x: T, y: T, z: T) -> T {
        match self {
            OpFn::Unary(f) => f(x),
            OpFn::Binary(f) => f(x, y),
            OpFn::Ternary(f) => f(x, y, z),
        }
    }
}

impl Op {
    /// Every operator, in check order
    pub const ALL: [Op; 23] = [
        Op::Add,
        Op::Sub,
        Op::Mul,
        Op::Div,
        Op::Neg,
        Op::Lt,
        Op::Lte,
        Op::Gt,
        Op::Gte,
        Op::Eq,
        Op::Neq,
        Op::And,
        Op::Or,
        Op::Not,
        Op::Min,
        Op::Max,
        Op::Present,
        Op::Null,
        Op::Round,
        Op::Floor,
        Op::Cond,
        Op::IsDefinedTrue,
        Op::IsDefinedFalse,
    ];

    /// Convert raw byte to operator identifier
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(Op::Add),
            0x02 => Some(Op::Sub),
            0x03 => Some(Op::Mul),
            0x04 => Some(Op::Div),
            0x05 => Some(Op::Neg),

            0x10 => Some(Op::Lt),
            0x11 => Some(Op::Lte),
            0x12 => Some(Op::Gt),
            0x13 => Some(Op::Gte),
            0x14 => Some(Op::Eq),
            0x15 => Some(Op::Neq),

            0x20 => Some(Op::And),
            0x21 => Some(Op::Or),
            0x22 => Some(Op::Not),

            0x30 => Some(Op::Min),
            0x31 => Some(Op::Max),
            0x32 => Some(Op::Present),
            0x33 => Some(Op::Null),
            0x34 => Some(Op::Round),
            0x35 => Some(Op::Floor),
            0x36 => Some(Op::Cond),

            0x40 => Some(Op::IsDefinedTrue),
            0x41 => Some(Op::IsDefinedFalse),

            _ => None,
        }
    }

    /// Stable lowercase name, used in diagnostics and `--expect` arguments
    pub fn name(&self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Div => "div",
            Op::Neg => "neg",
            Op::Lt => "lt",
            Op::Lte => "lte",
            Op::Gt => "gt",
            Op::Gte => "gte",
            Op::Eq => "eq",
            Op::Neq => "neq",
            Op::And => "and",
            Op::Or => "or",
            Op::Not => "not",
            Op::Min => "min",
            Op::Max => "max",
            Op::Present => "present",
            Op::Null => "null",
            Op::Round => "round",
            Op::Floor => "floor",
            Op::Cond => "cond",
            Op::IsDefinedTrue => "is_defined_true",
            Op::IsDefinedFalse => "is_defined_false",
        }
    }

    /// Look an operator up by its stable name
    pub fn from_name(name: &str) -> OvaResult<Self> {
        Op::ALL
            .iter()
            .copied()
            .find(|op| op.name() == name)
            .ok_or_else(|| OvaError::UnknownOperator(name.to_string()))
    }

    pub fn arity(&self) -> Arity {
        self.tagged().arity()
    }

    /// The tagged representation's operator
    pub fn tagged(&self) -> OpFn<TaggedValue> {
        match self {
            Op::Add => OpFn::Binary(TaggedValue::add),
            Op::Sub => OpFn::Binary(TaggedValue::sub),
            Op::Mul => OpFn::Binary(TaggedValue::mul),
            Op::Div => OpFn::Binary(TaggedValue::div),
            Op::Neg => OpFn::Unary(TaggedValue::neg),
            Op::Lt => OpFn::Binary(TaggedValue::lt),
            Op::Lte => OpFn::Binary(TaggedValue::lte),
            Op::Gt => OpFn::Binary(TaggedValue::gt),
            Op::Gte => OpFn::Binary(TaggedValue::gte),
            Op::Eq => OpFn::Binary(TaggedValue::eq),
            Op::Neq => OpFn::Binary(TaggedValue::neq),
            Op::And => OpFn::Binary(TaggedValue::and),
            Op::Or => OpFn::Binary(TaggedValue::or),
            Op::Not => OpFn::Unary(TaggedValue::not),
            Op::Min => OpFn::Binary(TaggedValue::min),
            Op::Max => OpFn::Binary(TaggedValue::max),
            Op::Present => OpFn::Unary(TaggedValue::present),
            Op::Null => OpFn::Unary(TaggedValue::null),
            Op::Round => OpFn::Unary(TaggedValue::round),
            Op::Floor => OpFn::Unary(TaggedValue::floor),
            Op::Cond => OpFn::Ternary(TaggedValue::cond),
            Op::IsDefinedTrue => OpFn::Unary(TaggedValue::is_defined_true),
            Op::IsDefinedFalse => OpFn::Unary(TaggedValue::is_defined_false),
        }
    }

    /// The sentinel representation's operator
    pub fn sentinel(&self) -> OpFn<SentinelValue> {
        match self {
            Op::Add => OpFn::Binary(SentinelValue::add),
            Op::Sub => OpFn::Binary(SentinelValue::sub),
            Op::Mul => OpFn::Binary(SentinelValue::mul),
            Op::Div => OpFn::Binary(SentinelValue::div),
            Op::Neg => OpFn::Unary(SentinelValue::neg),
            Op::Lt => OpFn::Binary(SentinelValue::lt),
            Op::Lte => OpFn::Binary(SentinelValue::lte),
            Op::Gt => OpFn::Binary(SentinelValue::gt),
            Op::Gte => OpFn::Binary(SentinelValue::gte),
            Op::Eq => OpFn::Binary(SentinelValue::eq),
            Op::Neq => OpFn::Binary(SentinelValue::neq),
            Op::And => OpFn::Binary(SentinelValue::and),
            Op::Or => OpFn::Binary(SentinelValue::or),
            Op::Not => OpFn::Unary(SentinelValue::not),
            Op::Min => OpFn::Binary(SentinelValue::min),
            Op::Max => OpFn::Binary(SentinelValue::max),
            Op::Present => OpFn::Unary(SentinelValue::present),
            Op::Null => OpFn::Unary(SentinelValue::null),
            Op::Round => OpFn::Unary(SentinelValue::round),
            Op::Floor => OpFn::Unary(SentinelValue::floor),
            Op::Cond => OpFn::Ternary(SentinelValue::cond),
            Op::IsDefinedTrue => OpFn::Unary(SentinelValue::is_defined_true),
            Op::IsDefinedFalse => OpFn::Unary(SentinelValue::is_defined_false),
        }
    }
}
