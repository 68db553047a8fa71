//! Construction driver.
//!
//! Starts from a single transition `q0 --input--> q1` and keeps replacing
//! labels with small sub-graphs until every label is a single symbol:
//!
//! ```text
//! union          s --e1--> t, ..., s --en--> t
//! concatenation  s --e1--> m1 --e2--> ... m(n-1) --en--> t
//! closure        s --_--> m,  m --e--> m,  m --_--> t
//! ```
//!
//! Each step creates all of its transitions before descending into any of
//! them, which fixes the state numbering.

use crate::automaton::{Automaton, State, TransitionId};
use crate::expr::{Decomposition, Expression};
use crate::{Error, Result, invariants};

use super::trace::{StepKind, Tracer};

/// Converts one expression into an automaton.
pub struct Converter<'t, T: Tracer> {
    expression: Expression,
    automaton: Automaton,
    tracer: &'t mut T,
}

impl<'t, T: Tracer> Converter<'t, T> {
    /// Validate `source` and prepare an automaton with its alphabet.
    ///
    /// Nothing is constructed for an invalid expression.
    pub fn new(source: &str, tracer: &'t mut T) -> Result<Self> {
        let expression = Expression::new(source);
        if let Err(reason) = expression.validate() {
            return Err(Error::InvalidExpression {
                expression: expression.to_string(),
                reason,
            });
        }

        let mut automaton = Automaton::new();
        automaton.compute_alphabet(source);

        Ok(Self {
            expression,
            automaton,
            tracer,
        })
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Seed and fully expand; returns the finished automaton.
    pub fn run(mut self) -> Automaton {
        let seed = self.seed();
        self.expand(seed);
        self.automaton
    }

    /// Create the start → accept transition labeled by the whole expression.
    pub fn seed(&mut self) -> TransitionId {
        let start = self.automaton.start();
        let accept = self.automaton.accept();
        let id = self
            .automaton
            .create_transition(start, self.expression.clone(), accept);
        self.tracer.trace_seed(self.automaton.transition(id));
        id
    }

    /// Decompose the label of transition `id`, then everything it produced.
    ///
    /// A minimal label is left alone.
    pub fn expand(&mut self, id: TransitionId) {
        let transition = self.automaton.transition(id).clone();
        let (source, label, target) = (transition.source, transition.label, transition.target);

        let decomposition = label
            .classify()
            .unwrap_or_else(|| invariants::unclassifiable(&label));

        match decomposition {
            Decomposition::Minimal => {}
            Decomposition::Union(branches) => self.expand_union(source, &label, branches, target),
            Decomposition::Concatenation(factors) => {
                self.expand_concatenation(source, &label, factors, target)
            }
            Decomposition::KleeneClosure(operand) => {
                self.expand_kleene_closure(source, &label, operand, target)
            }
        }
    }

    fn expand_union(
        &mut self,
        source: State,
        label: &Expression,
        branches: Vec<Expression>,
        target: State,
    ) {
        self.begin_step(StepKind::Union, label, source, target);

        let created: Vec<TransitionId> = branches
            .into_iter()
            .map(|branch| self.connect(source, branch, target))
            .collect();

        for id in created {
            self.expand(id);
        }
    }

    fn expand_concatenation(
        &mut self,
        source: State,
        label: &Expression,
        factors: Vec<Expression>,
        target: State,
    ) {
        self.begin_step(StepKind::Concatenation, label, source, target);

        let last = factors.len() - 1;
        let mut created = Vec::with_capacity(factors.len());
        let mut from = source;
        for (i, factor) in factors.into_iter().enumerate() {
            let to = if i == last {
                target
            } else {
                self.automaton.create_state()
            };
            created.push(self.connect(from, factor, to));
            from = to;
        }

        for id in created {
            self.expand(id);
        }
    }

    fn expand_kleene_closure(
        &mut self,
        source: State,
        label: &Expression,
        operand: Expression,
        target: State,
    ) {
        self.begin_step(StepKind::KleeneClosure, label, source, target);

        let middle = self.automaton.create_state();
        self.connect(source, Expression::empty_word(), middle);
        let repeat = self.connect(middle, operand, middle);
        self.connect(middle, Expression::empty_word(), target);

        self.expand(repeat);
    }

    fn begin_step(&mut self, kind: StepKind, label: &Expression, source: State, target: State) {
        log::debug!(
            "split {} in `{}` between {} and {}",
            kind,
            label,
            source.name(),
            target.name()
        );
        self.tracer.trace_step(kind, label);
    }

    fn connect(&mut self, source: State, label: Expression, target: State) -> TransitionId {
        let id = self.automaton.create_transition(source, label, target);
        self.tracer.trace_transition(self.automaton.transition(id));
        id
    }
}
