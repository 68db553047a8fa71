use crate::{Error, convert};

fn error_for(source: &str) -> Error {
    convert(source).unwrap_err()
}

#[test]
fn error_display() {
    let err = error_for("a**b");

    insta::assert_snapshot!(err.to_string(), @"invalid regular expression `a**b`: repeated Kleene closure `**`");
}

#[test]
fn error_display_uses_normalized_text() {
    let err = error_for(" ( a + ) ");

    insta::assert_snapshot!(err.to_string(), @"invalid regular expression `a+`: union symbol `+` is missing an operand");
}

#[test]
fn render_points_at_offending_text() {
    let err = error_for("ab(c");
    let rendered = err.printer().render();

    assert!(rendered.contains("invalid regular expression"), "{rendered}");
    assert!(rendered.contains("ab(c"), "{rendered}");
    assert!(rendered.contains("unclosed `(`"), "{rendered}");
    assert!(rendered.contains('^'), "{rendered}");
}

#[test]
fn render_plain_has_no_ansi() {
    let rendered = error_for("a++b").printer().colored(false).render();

    assert!(!rendered.contains('\x1b'), "{rendered}");
}

#[test]
fn render_empty_expression() {
    let rendered = error_for("   ").printer().render();

    insta::assert_snapshot!(rendered, @"error: expression is empty");
}
