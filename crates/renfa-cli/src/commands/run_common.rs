//! Steps shared by every command: load, validate and build, report.

use renfa_lib::{Automaton, Error, Tracer, convert_traced};
use serde::Serialize;

use super::expr_loader::{ExprSource, load_expression};

pub fn load_or_exit(source: &ExprSource) -> String {
    load_expression(source).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    })
}

/// Convert, or render the diagnostic to stderr and exit 1.
pub fn convert_or_exit<T: Tracer>(text: &str, tracer: &mut T, color: bool) -> Automaton {
    convert_traced(text, tracer).unwrap_or_else(|err| exit_with(&err, color))
}

pub fn exit_with(err: &Error, color: bool) -> ! {
    eprint!("{}", err.printer().colored(color).render());
    std::process::exit(1);
}

pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: JSON serialization failed: {}", e);
            std::process::exit(1);
        }
    }
}
