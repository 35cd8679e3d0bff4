//! Conformance Suite
//!
//! Drives every operator over a fixed matrix of logical inputs in both
//! representations and collects the divergences the oracle finds. The run
//! is deterministic and single-threaded; check order only affects the
//! order of diagnostics, never the outcome.

use serde::Serialize;

use crate::ops::Op;
use crate::oracle::{equivalent, Divergence};
use crate::value::sentinel::SentinelValue;
use crate::value::tagged::TaggedValue;
use crate::value::LogicalValue;

/// One logical input row. `x` and `y` feed unary and binary operators
/// (unary operators take `x`); ternary operators take `x` as the
/// condition and `y`/`z` as the branches.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MatrixRow {
    pub x: LogicalValue,
    pub y: LogicalValue,
    pub z: LogicalValue,
}

/// The fixed five-row matrix: undefined-undefined, undefined-defined,
/// defined-undefined and defined-defined pairings, with equal and distinct
/// magnitudes. Built fresh per call, never shared.
pub fn default_matrix() -> Vec<MatrixRow> {
    use LogicalValue::{Defined, Undefined};
    vec![
        MatrixRow { x: Undefined, y: Undefined, z: Defined(2.0) },
        MatrixRow { x: Undefined, y: Defined(1.0), z: Undefined },
        MatrixRow { x: Undefined, y: Defined(0.0), z: Defined(2.0) },
        MatrixRow { x: Defined(1.6), y: Defined(1.0), z: Undefined },
        MatrixRow { x: Defined(0.0), y: Defined(1.0), z: Defined(2.0) },
    ]
}

/// Conformance run configuration
pub struct ConformanceSuite {
    rows: Vec<MatrixRow>,
    expected: Vec<Op>,
}

impl Default for ConformanceSuite {
    fn default() -> Self {
        ConformanceSuite { rows: default_matrix(), expected: Vec::new() }
    }
}

impl ConformanceSuite {
    /// Suite over the default matrix with no expected divergences
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the input matrix
    pub fn with_rows(mut self, rows: Vec<MatrixRow>) -> Self {
        self.rows = rows;
        self
    }

    /// Mark an operator as known-divergent: its divergences are tracked
    /// but not counted as regressions
    pub fn expect_divergent(mut self, op: Op) -> Self {
        if !self.expected.contains(&op) {
            self.expected.push(op);
        }
        self
    }

    /// Run every check and aggregate the result. Never stops early: one
    /// operator's failures do not suppress checks of the others.
    pub fn run(&self) -> ConformanceReport {
        let mut checks = 0usize;
        let mut divergences: Vec<Divergence> = Vec::new();

        // the conversion itself must agree before operator results can
        for (i, row) in self.rows.iter().enumerate() {
            for logical in [row.x, row.y, row.z] {
                checks += 1;
                let t = TaggedValue::from(logical);
                let s = SentinelValue::from(logical);
                if !equivalent(t, s) {
                    divergences.push(Divergence::new("convert", i, t, s));
                }
            }
        }

        for op in Op::ALL {
            tracing::debug!(op = op.name(), "running operator checks");
            let tagged_fn = op.tagged();
            let sentinel_fn = op.sentinel();
            let expected = self.expected.contains(&op);

            for (i, row) in self.rows.iter().enumerate() {
                checks += 1;
                let t = tagged_fn.apply(row.x.into(), row.y.into(), row.z.into());
                let s = sentinel_fn.apply(row.x.into(), row.y.into(), row.z.into());
                if !equivalent(t, s) {
                    let mut d = Divergence::new(op.name(), i, t, s);
                    d.expected = expected;
                    tracing::warn!(op = d.op, row = d.row, expected, "representation divergence");
                    divergences.push(d);
                }
            }
        }

        let expected_ops: Vec<&'static str> =
            self.expected.iter().map(|op| op.name()).collect();
        ConformanceReport { checks, divergences, expected_ops }
    }
}

/// Aggregate outcome of a conformance run
#[derive(Debug, Clone, Serialize)]
pub struct ConformanceReport {
    /// Total number of oracle checks performed
    pub checks: usize,
    /// Every detected divergence, in check order
    pub divergences: Vec<Divergence>,
    /// Operators the caller declared expected-divergent
    pub expected_ops: Vec<&'static str>,
}

impl ConformanceReport {
    pub fn divergence_count(&self) -> usize {
        self.divergences.len()
    }

    /// Divergences not covered by the expected-divergent list
    pub fn regression_count(&self) -> usize {
        self.divergences.iter().filter(|d| !d.expected).count()
    }

    /// Full conformance modulo the expected-divergent list
    pub fn is_conformant(&self) -> bool {
        self.regression_count() == 0
    }
}
