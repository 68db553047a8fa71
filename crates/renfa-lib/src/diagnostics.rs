//! Rendering of conversion errors for terminals.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use crate::Error;

/// Builder for rendering an [`Error`] against its expression text.
pub struct DiagnosticPrinter<'e> {
    error: &'e Error,
    colored: bool,
}

impl<'e> DiagnosticPrinter<'e> {
    pub fn new(error: &'e Error) -> Self {
        Self {
            error,
            colored: false,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Error::InvalidExpression { expression, reason } = self.error;

        // Nothing to point at.
        if expression.is_empty() {
            return writeln!(w, "error: {}", reason);
        }

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let label = reason.to_string();
        let snippet = Snippet::source(expression.as_str()).line_start(1).annotation(
            AnnotationKind::Primary
                .span(adjust_range(reason.range(), expression.len()))
                .label(&label),
        );
        let report = vec![
            Level::ERROR
                .primary_title("invalid regular expression")
                .element(snippet),
        ];

        writeln!(w, "{}", renderer.render(&report))
    }
}

fn adjust_range(range: Range<usize>, limit: usize) -> Range<usize> {
    let start = range.start.min(limit);
    let end = range.end.min(limit);

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}

impl Error {
    pub fn printer(&self) -> DiagnosticPrinter<'_> {
        DiagnosticPrinter::new(self)
    }
}
