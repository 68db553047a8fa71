//! The automaton under construction and its formal 5-tuple.
//!
//! States live in a flat vector indexed by `StateId`, so a state's number is
//! also its position. Transitions are append-only and addressed by
//! `TransitionId`. Nothing is ever removed: a decomposed transition stays in
//! the list next to the finer transitions that replace it, and only minimal
//! transitions make up the transition relation.

mod dump;
mod simulate;


use std::cmp::Ordering;
use std::fmt;

use indexmap::IndexSet;
use serde::{Serialize, Serializer};

use crate::expr::{Expression, is_metacharacter};

pub use dump::AutomatonPrinter;

/// Index into `Automaton::states`; the `N` of `qN`.
pub type StateId = u32;

/// Index into `Automaton::transitions`.
pub type TransitionId = u32;

pub const START: StateId = 0;
pub const ACCEPT: StateId = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateRole {
    Start,
    Accept,
    Plain,
}

/// A state of the automaton.
///
/// Ordered by number. Displays as `>(q0)` for the start state, `((q1))` for
/// the accept state and `(qN)` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    id: StateId,
    role: StateRole,
}

impl State {
    pub fn id(self) -> StateId {
        self.id
    }

    pub fn role(self) -> StateRole {
        self.role
    }

    /// `qN`.
    pub fn name(self) -> String {
        format!("q{}", self.id)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            StateRole::Start => write!(f, ">(q{})", self.id),
            StateRole::Accept => write!(f, "((q{}))", self.id),
            StateRole::Plain => write!(f, "(q{})", self.id),
        }
    }
}

impl Serialize for State {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

/// `source --label--> target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Transition {
    pub source: State,
    pub label: Expression,
    pub target: State,
}

impl Transition {
    /// Presentation order: by source, then by label text. Ties keep
    /// creation order when used with a stable sort.
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.source
            .cmp(&other.source)
            .then_with(|| self.label.cmp(&other.label))
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --- {} --> {}", self.source, self.label, self.target)
    }
}

/// Non-deterministic finite automaton with a single start and accept state.
#[derive(Debug, Clone)]
pub struct Automaton {
    states: Vec<State>,
    alphabet: IndexSet<char>,
    transitions: Vec<Transition>,
}

impl Automaton {
    /// Automaton with start state `q0` and accept state `q1`.
    pub fn new() -> Self {
        Self {
            states: vec![
                State {
                    id: START,
                    role: StateRole::Start,
                },
                State {
                    id: ACCEPT,
                    role: StateRole::Accept,
                },
            ],
            alphabet: IndexSet::new(),
            transitions: Vec::new(),
        }
    }

    pub fn start(&self) -> State {
        self.states[START as usize]
    }

    pub fn accept(&self) -> State {
        self.states[ACCEPT as usize]
    }

    /// All states, in number order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn state(&self, id: StateId) -> State {
        self.states[id as usize]
    }

    /// Symbols in order of first occurrence.
    pub fn alphabet(&self) -> &IndexSet<char> {
        &self.alphabet
    }

    /// Every transition ever created, in creation order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn transition(&self, id: TransitionId) -> &Transition {
        &self.transitions[id as usize]
    }

    /// Add a plain state numbered after all existing ones.
    pub fn create_state(&mut self) -> State {
        let state = State {
            id: self.states.len() as StateId,
            role: StateRole::Plain,
        };
        self.states.push(state);
        log::trace!("created state {}", state.name());
        state
    }

    /// Append a transition. No deduplication.
    pub fn create_transition(
        &mut self,
        source: State,
        label: Expression,
        target: State,
    ) -> TransitionId {
        let id = self.transitions.len() as TransitionId;
        let transition = Transition {
            source,
            label,
            target,
        };
        log::trace!("created transition {}", transition);
        self.transitions.push(transition);
        id
    }

    /// Add every non-metacharacter of `text` to the alphabet.
    pub fn compute_alphabet(&mut self, text: &str) {
        let symbols = text
            .chars()
            .filter(|c| !c.is_whitespace() && !is_metacharacter(*c));
        self.alphabet.extend(symbols);
    }

    /// The transition relation: transitions labeled by one symbol or `_`,
    /// in presentation order.
    pub fn minimal_transitions(&self) -> Vec<&Transition> {
        let mut relation: Vec<&Transition> = self
            .transitions
            .iter()
            .filter(|t| t.label.is_minimal())
            .collect();
        relation.sort_by(|a, b| a.canonical_cmp(b));
        relation
    }

    /// Serializable view of the 5-tuple.
    pub fn quintuple(&self) -> Quintuple<'_> {
        Quintuple {
            states: &self.states,
            alphabet: &self.alphabet,
            accept: self.accept(),
            start: self.start(),
            transitions: self.minimal_transitions(),
        }
    }

    pub fn printer(&self) -> AutomatonPrinter<'_> {
        AutomatonPrinter::new(self)
    }
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.printer().dump())
    }
}

/// (K, E, F, S, D) as plain data.
#[derive(Debug, Serialize)]
pub struct Quintuple<'a> {
    pub states: &'a [State],
    pub alphabet: &'a IndexSet<char>,
    pub accept: State,
    pub start: State,
    pub transitions: Vec<&'a Transition>,
}
