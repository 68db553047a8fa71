use crate::automaton::Automaton;
use crate::convert::{Converter, NoopTracer};
use crate::expr::ValidationError;
use crate::{Error, convert};

fn rows(automaton: &Automaton) -> Vec<String> {
    automaton
        .minimal_transitions()
        .iter()
        .map(|t| format!("{} {} {}", t.source.name(), t.label, t.target.name()))
        .collect()
}

fn state_names(automaton: &Automaton) -> Vec<String> {
    automaton.states().iter().map(|s| s.name()).collect()
}

#[test]
fn single_symbol() {
    let nfa = convert("a").unwrap();

    assert_eq!(state_names(&nfa), ["q0", "q1"]);
    assert_eq!(rows(&nfa), ["q0 a q1"]);
    assert_eq!(nfa.alphabet().len(), 1);
    assert!(nfa.alphabet().contains(&'a'));
}

#[test]
fn concatenation() {
    let nfa = convert("ab").unwrap();

    assert_eq!(state_names(&nfa), ["q0", "q1", "q2"]);
    assert_eq!(rows(&nfa), ["q0 a q2", "q2 b q1"]);
}

#[test]
fn kleene_closure() {
    let nfa = convert("a*").unwrap();

    assert_eq!(state_names(&nfa), ["q0", "q1", "q2"]);
    assert_eq!(rows(&nfa), ["q0 _ q2", "q2 _ q1", "q2 a q2"]);
}

#[test]
fn union() {
    let nfa = convert("a+b").unwrap();

    assert_eq!(state_names(&nfa), ["q0", "q1"]);
    assert_eq!(rows(&nfa), ["q0 a q1", "q0 b q1"]);
}

#[test]
fn alphabet_of_nested_expression() {
    let nfa = convert("(a+b)*c").unwrap();

    let alphabet: Vec<char> = nfa.alphabet().iter().copied().collect();
    assert_eq!(alphabet, ['a', 'b', 'c']);
}

#[test]
fn concatenation_creates_states_before_descending() {
    let nfa = convert("a(bc)d*").unwrap();

    // q2, q3 from the outer split; q4 from `bc`; q5 from `d*`.
    assert_eq!(
        rows(&nfa),
        [
            "q0 a q2",
            "q2 b q4",
            "q3 _ q5",
            "q4 c q3",
            "q5 _ q1",
            "q5 d q5",
        ]
    );
}

#[test]
fn whitespace_is_ignored() {
    let spaced = convert(" a ( b + c ) ").unwrap();
    let compact = convert("a(b+c)").unwrap();

    assert_eq!(rows(&spaced), rows(&compact));
    assert_eq!(spaced.alphabet(), compact.alphabet());
}

#[test]
fn redundant_grouping_is_removed() {
    let nfa = convert("((a))").unwrap();

    assert_eq!(rows(&nfa), ["q0 a q1"]);
}

#[test]
fn compound_labels_stay_in_transition_list() {
    let nfa = convert("ab").unwrap();

    let labels: Vec<&str> = nfa.transitions().iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["ab", "a", "b"]);
}

#[test]
fn invalid_expression_is_rejected() {
    let err = convert("a**b").unwrap_err();

    let Error::InvalidExpression { expression, reason } = err;
    assert_eq!(expression, "a**b");
    assert_eq!(reason, ValidationError::RepeatedKleene { offset: 1 });
}

#[test]
fn invalid_expression_builds_nothing() {
    let mut tracer = NoopTracer;

    for source in ["*", "+", "|", "a++b", "a+*b", "(a+b", ""] {
        assert!(Converter::new(source, &mut tracer).is_err(), "{source}");
    }
}

#[test]
fn expanding_a_minimal_label_is_a_noop() {
    let mut tracer = NoopTracer;
    let mut converter = Converter::new("a", &mut tracer).unwrap();

    let seed = converter.seed();
    converter.expand(seed);
    converter.expand(seed);

    assert_eq!(converter.automaton().states().len(), 2);
    assert_eq!(converter.automaton().transitions().len(), 1);
}

#[test]
fn converter_exposes_normalized_expression() {
    let mut tracer = NoopTracer;
    let converter = Converter::new(" (a b) ", &mut tracer).unwrap();

    assert_eq!(converter.expression().as_str(), "ab");
    assert!(converter.automaton().transitions().is_empty());
}
