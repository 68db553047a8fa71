//! renfa: regular expression to NFA conversion by recursive decomposition.
//!
//! An expression is validated, then grown into an automaton one label at a
//! time: unions fan out between the same two states, concatenations chain
//! through new states, and Kleene closures loop on a new state reached by
//! empty-word transitions.
//!
//! # Example
//!
//! ```
//! let nfa = renfa_lib::convert("(a+b)*c").unwrap();
//!
//! assert!(nfa.accepts("abbac"));
//! assert!(!nfa.accepts("ab"));
//! print!("{}", nfa);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod automaton;
pub mod balance;
pub mod colors;
pub mod convert;
pub mod diagnostics;
pub mod expr;

mod invariants;

#[cfg(test)]
mod balance_tests;
#[cfg(test)]
mod diagnostics_tests;

pub use automaton::{Automaton, AutomatonPrinter, Quintuple, State, StateRole, Transition};
pub use colors::Colors;
pub use convert::{Converter, NarrationTracer, NoopTracer, Tracer, convert, convert_traced};
pub use diagnostics::DiagnosticPrinter;
pub use expr::{Expression, ValidationError};

/// Errors that can occur during conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The expression failed validation; nothing was constructed.
    #[error("invalid regular expression `{expression}`: {reason}")]
    InvalidExpression {
        /// Normalized expression text; `reason` ranges index into it.
        expression: String,
        reason: ValidationError,
    },
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
