//! Word acceptance over the transition relation.
//!
//! Only minimal transitions take part. `_` moves without consuming input.

use std::collections::BTreeSet;

use super::{ACCEPT, Automaton, START, StateId, Transition};

impl Automaton {
    /// True if some path from the start state spells `word` and ends in the
    /// accept state.
    pub fn accepts(&self, word: &str) -> bool {
        let relation = self.minimal_transitions();

        let mut current = epsilon_closure(&relation, BTreeSet::from([START]));
        for symbol in word.chars() {
            let moved: BTreeSet<StateId> = relation
                .iter()
                .filter(|t| current.contains(&t.source.id()))
                .filter(|t| !t.label.is_empty_word() && t.label.symbol() == Some(symbol))
                .map(|t| t.target.id())
                .collect();
            if moved.is_empty() {
                return false;
            }
            current = epsilon_closure(&relation, moved);
        }

        current.contains(&ACCEPT)
    }
}

fn epsilon_closure(relation: &[&Transition], states: BTreeSet<StateId>) -> BTreeSet<StateId> {
    let mut closure = states.clone();
    let mut stack: Vec<StateId> = states.into_iter().collect();

    while let Some(id) = stack.pop() {
        let targets = relation
            .iter()
            .filter(|t| t.source.id() == id && t.label.is_empty_word())
            .map(|t| t.target.id());
        for target in targets {
            if closure.insert(target) {
                stack.push(target);
            }
        }
    }

    closure
}
