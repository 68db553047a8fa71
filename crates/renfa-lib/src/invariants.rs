//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::expr::Expression;

/// A validated expression always classifies; reaching this is a classifier bug.
pub(crate) fn unclassifiable(label: &Expression) -> ! {
    panic!(
        "Converter: label `{label}` is neither minimal, union, concatenation nor Kleene closure \
         (validation must reject expressions that decompose into it)"
    )
}
