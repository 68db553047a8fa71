use std::path::PathBuf;

use super::expr_loader::{ExprSource, load_expression, read_line};

#[test]
fn inline_text_wins() {
    let source = ExprSource::new(Some(PathBuf::from("expr.txt")), Some("ab".to_string()));

    assert_eq!(source, ExprSource::Inline("ab".to_string()));
}

#[test]
fn dash_means_stdin() {
    let source = ExprSource::new(Some(PathBuf::from("-")), None);

    assert_eq!(source, ExprSource::Stdin);
}

#[test]
fn nothing_given_prompts() {
    assert_eq!(ExprSource::new(None, None), ExprSource::Prompt);
}

#[test]
fn load_inline() {
    let text = load_expression(&ExprSource::Inline("(a+b)*".to_string())).unwrap();

    assert_eq!(text, "(a+b)*");
}

#[test]
fn load_missing_file() {
    let path = PathBuf::from("definitely/not/here.txt");
    let err = load_expression(&ExprSource::File(path)).unwrap_err();

    assert!(err.starts_with("failed to read 'definitely/not/here.txt'"), "{err}");
}

#[test]
fn read_line_takes_first_line() {
    let input = b"a+b\r\nignored\n".as_slice();

    assert_eq!(read_line(input).unwrap(), "a+b");
}

#[test]
fn read_line_without_newline() {
    assert_eq!(read_line(b"ab*".as_slice()).unwrap(), "ab*");
}

#[test]
fn read_line_at_eof() {
    let err = read_line(b"".as_slice()).unwrap_err();

    insta::assert_snapshot!(err, @"expression is required: use positional argument, -f/--file, or type it at the prompt");
}

#[test]
fn load_from_file() {
    use std::io::Write;

    let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
    tmpfile.write_all(b"(a + b)*\n").unwrap();
    tmpfile.flush().unwrap();

    let source = ExprSource::new(Some(tmpfile.path().to_path_buf()), None);
    let text = load_expression(&source).unwrap();

    assert_eq!(text, "(a + b)*\n");
    assert!(renfa_lib::convert(&text).is_ok());
}
