//! Regular expression to NFA conversion.
//!
//! ```
//! let nfa = renfa_lib::convert("ab").unwrap();
//!
//! assert_eq!(nfa.states().len(), 3);
//! assert!(nfa.accepts("ab"));
//! ```

mod converter;
mod trace;

#[cfg(test)]
mod convert_tests;

pub use converter::Converter;
pub use trace::{NarrationTracer, NoopTracer, StepKind, Tracer};

use crate::Result;
use crate::automaton::Automaton;

/// Convert `source` into an automaton.
pub fn convert(source: &str) -> Result<Automaton> {
    convert_traced(source, &mut NoopTracer)
}

/// Convert `source`, reporting each construction step to `tracer`.
pub fn convert_traced<T: Tracer>(source: &str, tracer: &mut T) -> Result<Automaton> {
    Ok(Converter::new(source, tracer)?.run())
}
