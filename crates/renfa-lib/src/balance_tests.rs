use crate::balance::*;

#[test]
fn balanced_texts() {
    assert!(is_balanced(""));
    assert!(is_balanced("a"));
    assert!(is_balanced("(a+b)"));
    assert!(is_balanced("[a(b)c]"));
    assert!(is_balanced("(a)(b)*"));
}

#[test]
fn unbalanced_texts() {
    assert!(!is_balanced("(a"));
    assert!(!is_balanced("a)"));
    assert!(!is_balanced("([a)]"));
    assert!(!is_balanced(")("));
}

#[test]
fn unexpected_closer_offset() {
    let err = check_balance("ab)").unwrap_err();

    assert_eq!(err.offset, 2);
    assert_eq!(err.kind, ImbalanceKind::UnexpectedCloser(Bracket::Paren));
}

#[test]
fn mismatched_closer_offset() {
    let err = check_balance("([a)]").unwrap_err();

    assert_eq!(err.offset, 3);
    assert_eq!(
        err.kind,
        ImbalanceKind::MismatchedCloser {
            open: Bracket::Square,
            close: Bracket::Paren,
        }
    );
}

#[test]
fn unclosed_points_at_innermost_opener() {
    let err = check_balance("(a[b").unwrap_err();

    assert_eq!(err.offset, 2);
    assert_eq!(err.kind, ImbalanceKind::Unclosed(Bracket::Square));
}

#[test]
fn offsets_are_byte_offsets() {
    let err = check_balance("éé)").unwrap_err();

    assert_eq!(err.offset, 4);
}

#[test]
fn imbalance_display() {
    let unexpected = check_balance("a]").unwrap_err();
    let mismatched = check_balance("(a]").unwrap_err();
    let unclosed = check_balance("[a").unwrap_err();

    insta::assert_snapshot!(unexpected.to_string(), @"unexpected `]` with no open group");
    insta::assert_snapshot!(mismatched.to_string(), @"`]` closes a group opened with `(`");
    insta::assert_snapshot!(unclosed.to_string(), @"unclosed `[`");
}
