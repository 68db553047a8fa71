//! Step-by-step narration of a conversion.
//!
//! The converter reports every step to a [`Tracer`]. `NoopTracer` compiles
//! away; `NarrationTracer` writes the steps out as text:
//!
//! ```text
//! Step 1. Add start and accept states
//! >(q0) --- ab --> ((q1))
//!
//! Step 2. Split concatenation in ab:
//! >(q0) --- a --> (q2)
//! (q2) --- b --> ((q1))
//! ```

use std::fmt::{self, Write};

use crate::automaton::Transition;
use crate::expr::Expression;

/// Which rule a decomposition step applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Union,
    Concatenation,
    KleeneClosure,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKind::Union => f.write_str("union"),
            StepKind::Concatenation => f.write_str("concatenation"),
            StepKind::KleeneClosure => f.write_str("Kleene closure"),
        }
    }
}

/// Observer of conversion steps.
///
/// Calls arrive in construction order: one `trace_seed`, then for each
/// decomposition a `trace_step` followed by one `trace_transition` per
/// transition the step created.
pub trait Tracer {
    /// Called once with the start → accept transition labeled by the input.
    fn trace_seed(&mut self, transition: &Transition);

    /// Called when `label` starts being decomposed.
    fn trace_step(&mut self, kind: StepKind, label: &Expression);

    /// Called for each transition created by the current step.
    fn trace_transition(&mut self, transition: &Transition);
}

/// Tracer that does nothing.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_seed(&mut self, _transition: &Transition) {}

    #[inline(always)]
    fn trace_step(&mut self, _kind: StepKind, _label: &Expression) {}

    #[inline(always)]
    fn trace_transition(&mut self, _transition: &Transition) {}
}

/// Tracer that accumulates numbered, human-readable steps.
#[derive(Debug, Default)]
pub struct NarrationTracer {
    out: String,
    steps: u32,
}

impl NarrationTracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of steps narrated so far, the seed step included.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn output(&self) -> &str {
        &self.out
    }

    pub fn into_output(self) -> String {
        self.out
    }

    fn begin_step(&mut self) {
        if self.steps > 0 {
            self.out.push('\n');
        }
        self.steps += 1;
    }
}

impl Tracer for NarrationTracer {
    fn trace_seed(&mut self, transition: &Transition) {
        self.begin_step();
        let _ = writeln!(self.out, "Step {}. Add start and accept states", self.steps);
        let _ = writeln!(self.out, "{}", transition);
    }

    fn trace_step(&mut self, kind: StepKind, label: &Expression) {
        self.begin_step();
        let _ = writeln!(self.out, "Step {}. Split {} in {}:", self.steps, kind, label);
    }

    fn trace_transition(&mut self, transition: &Transition) {
        let _ = writeln!(self.out, "{}", transition);
    }
}
