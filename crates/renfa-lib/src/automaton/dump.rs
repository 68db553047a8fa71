//! Text rendering of the formal 5-tuple.
//!
//! ```text
//! K = {q0, q1, q2}
//! E = {a}
//! F = {q1}
//! S = q0
//! D =
//! q	o	D(q,o)
//! q0	_	q2
//! ```
//!
//! Columns of `D` are tab-separated.

use std::fmt::Write;

use crate::Colors;

use super::{Automaton, Transition};

/// Printer for `Automaton` with optional colors.
pub struct AutomatonPrinter<'a> {
    automaton: &'a Automaton,
    colors: Colors,
}

impl<'a> AutomatonPrinter<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Self {
            automaton,
            colors: Colors::OFF,
        }
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut String) -> std::fmt::Result {
        let c = self.colors;
        let automaton = self.automaton;

        self.format_name(w, "K")?;
        let names = automaton.states().iter().map(|s| s.name());
        write_set(w, names)?;

        self.format_name(w, "E")?;
        let symbols = automaton.alphabet().iter().map(|sym| self.symbol(*sym));
        write_set(w, symbols)?;

        self.format_name(w, "F")?;
        write_set(w, std::iter::once(automaton.accept().name()))?;

        self.format_name(w, "S")?;
        writeln!(w, "{}", automaton.start().name())?;

        self.format_name(w, "D")?;
        writeln!(w)?;
        writeln!(w, "{}q\to\tD(q,o){}", c.dim, c.reset)?;
        for transition in automaton.minimal_transitions() {
            self.format_row(w, transition)?;
        }

        Ok(())
    }

    fn format_name(&self, w: &mut String, name: &str) -> std::fmt::Result {
        let c = self.colors;
        write!(w, "{}{}{} =", c.blue, name, c.reset)?;
        if name != "D" {
            w.push(' ');
        }
        Ok(())
    }

    fn format_row(&self, w: &mut String, transition: &Transition) -> std::fmt::Result {
        let symbol = match transition.label.symbol() {
            Some(sym) => self.symbol(sym),
            None => transition.label.to_string(),
        };
        writeln!(
            w,
            "{}\t{}\t{}",
            transition.source.name(),
            symbol,
            transition.target.name()
        )
    }

    fn symbol(&self, sym: char) -> String {
        let c = self.colors;
        if sym == crate::expr::EMPTY_WORD {
            format!("{}{}{}", c.dim, sym, c.reset)
        } else {
            format!("{}{}{}", c.green, sym, c.reset)
        }
    }
}

fn write_set(w: &mut String, items: impl Iterator<Item = String>) -> std::fmt::Result {
    let items: Vec<String> = items.collect();
    writeln!(w, "{{{}}}", items.join(", "))
}
