use super::*;

#[test]
fn whitespace_is_removed() {
    let expr = Expression::new(" a + b\t* ");

    assert_eq!(expr.as_str(), "a+b*");
}

#[test]
fn outer_grouping_is_stripped() {
    assert_eq!(Expression::new("(a+b)").as_str(), "a+b");
    assert_eq!(Expression::new("[ab]").as_str(), "ab");
    assert_eq!(Expression::new("([a])").as_str(), "a");
}

#[test]
fn outer_grouping_kept_when_residual_unbalanced() {
    assert_eq!(Expression::new("(a)(b)").as_str(), "(a)(b)");
    assert_eq!(Expression::new("[a+b][c+d]").as_str(), "[a+b][c+d]");
}

#[test]
fn grouping_of_other_kind_is_kept() {
    assert_eq!(strip_outer_grouping("(a]"), "(a]");
    assert_eq!(strip_outer_grouping("(a+b)*"), "(a+b)*");
}

#[test]
fn strip_outer_grouping_removes_one_layer() {
    assert_eq!(strip_outer_grouping("((a))"), "(a)");
    assert_eq!(strip_outer_grouping("a"), "a");
    assert_eq!(strip_outer_grouping(""), "");
}

#[test]
fn minimal_is_single_symbol() {
    assert!(Expression::new("a").is_minimal());
    assert!(Expression::empty_word().is_minimal());
    assert!(Expression::new("é").is_minimal());
    assert!(!Expression::new("ab").is_minimal());
    assert!(!Expression::new("a*").is_minimal());
}

#[test]
fn union_split_all_spellings() {
    let expr = Expression::new("a+b,c|d");

    assert_eq!(expr.split_by_union(), vec!["a", "b", "c", "d"]);
    assert!(expr.is_union());
}

#[test]
fn union_split_ignores_nested_symbols() {
    let expr = Expression::new("(a+b)c");

    assert_eq!(expr.split_by_union(), vec!["(a+b)c"]);
    assert!(!expr.is_union());
}

#[test]
fn union_split_keeps_groups_in_branches() {
    assert_eq!(
        split_by_union("(a+b)c+d*+[e|f]"),
        vec!["(a+b)c", "d*", "[e|f]"]
    );
}

#[test]
fn concatenation_split_keeps_closure_with_base() {
    let expr = Expression::new("a(bc)d*");

    assert_eq!(expr.split_by_concatenation(), vec!["a", "(bc)", "d*"]);
    assert!(expr.is_concatenation());
}

#[test]
fn concatenation_split_delegates_union() {
    let expr = Expression::new("a+b");

    assert_eq!(expr.split_by_concatenation(), vec!["a+b"]);
    assert!(!expr.is_concatenation());
}

#[test]
fn concatenation_split_group_closures() {
    assert_eq!(
        split_by_concatenation("(ab)*[c+d]e*"),
        vec!["(ab)*", "[c+d]", "e*"]
    );
    assert_eq!(split_by_concatenation("(a)(b)"), vec!["(a)", "(b)"]);
}

#[test]
fn kleene_closure_recognition() {
    assert!(Expression::new("a*").is_kleene_closure());
    assert!(Expression::new("(ab)*").is_kleene_closure());
    assert!(Expression::new("[a+b]*").is_kleene_closure());

    assert!(!Expression::new("ab*").is_kleene_closure());
    assert!(!Expression::new("(a)(b)*").is_kleene_closure());
    assert!(!Expression::new("a").is_kleene_closure());
}

#[test]
fn strip_kleene_closure_removes_grouping() {
    assert_eq!(Expression::new("a*").strip_kleene_closure().as_str(), "a");
    assert_eq!(
        Expression::new("(a+b)*").strip_kleene_closure().as_str(),
        "a+b"
    );
    assert_eq!(
        Expression::new("[(ab)c]*").strip_kleene_closure().as_str(),
        "(ab)c"
    );
}

#[test]
fn strip_kleene_closure_leaves_other_expressions() {
    let expr = Expression::new("ab*");

    assert_eq!(expr.strip_kleene_closure(), expr);
}

#[test]
fn classify_precedence() {
    assert_eq!(Expression::new("a").classify(), Some(Decomposition::Minimal));
    assert_eq!(
        Expression::new("ab+c").classify(),
        Some(Decomposition::Union(vec![
            Expression::new("ab"),
            Expression::new("c"),
        ]))
    );
    assert_eq!(
        Expression::new("a(b+c)").classify(),
        Some(Decomposition::Concatenation(vec![
            Expression::new("a"),
            Expression::new("b+c"),
        ]))
    );
    assert_eq!(
        Expression::new("(a+b)*").classify(),
        Some(Decomposition::KleeneClosure(Expression::new("a+b")))
    );
}

#[test]
fn classify_normalizes_sub_expressions() {
    let Some(Decomposition::Concatenation(factors)) = Expression::new("a(bc)d*").classify() else {
        panic!("expected concatenation");
    };

    let texts: Vec<&str> = factors.iter().map(Expression::as_str).collect();
    assert_eq!(texts, vec!["a", "bc", "d*"]);
}

#[test]
fn classify_rejects_empty() {
    assert_eq!(Expression::new("").classify(), None);
}

#[test]
fn metacharacters() {
    for c in ['(', ')', '[', ']', '+', '*', ',', '|'] {
        assert!(is_metacharacter(c), "{c}");
    }
    assert!(!is_metacharacter('a'));
    assert!(!is_metacharacter(EMPTY_WORD));
}
