//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("renfa")
        .about("Convert regular expressions into nondeterministic finite automata")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(convert_command())
        .subcommand(check_command())
        .subcommand(run_command())
}

/// Build the automaton and print its 5-tuple.
pub fn convert_command() -> Command {
    Command::new("convert")
        .about("Convert an expression into an NFA")
        .override_usage(
            "\
  renfa convert <EXPR>
  renfa convert -f <FILE>
  renfa convert",
        )
        .after_help(
            r#"EXAMPLES:
  renfa convert '(a+b)*c'             # 5-tuple as text
  renfa convert 'ab' --steps          # narrate each split
  renfa convert -f expr.txt           # expression from file
  renfa convert 'a|b' --format json   # 5-tuple as JSON"#,
        )
        .arg(expr_text_arg().conflicts_with("expr_file"))
        .arg(expr_file_arg())
        .arg(steps_arg())
        .arg(format_arg())
        .arg(color_arg())
}

/// Validate only.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate an expression")
        .override_usage(
            "\
  renfa check <EXPR>
  renfa check -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  renfa check 'a**b'                  # reports the repeated `*`
  echo '(a+b' | renfa check -f -      # expression from stdin"#,
        )
        .arg(expr_text_arg().conflicts_with("expr_file"))
        .arg(expr_file_arg())
        .arg(color_arg())
}

/// Build the automaton and test words against it.
///
/// With `-f` every positional is a word.
pub fn run_command() -> Command {
    Command::new("run")
        .about("Test which words the NFA accepts")
        .override_usage(
            "\
  renfa run <EXPR> <WORD>...
  renfa run -f <FILE> <WORD>...",
        )
        .after_help(
            r#"EXAMPLES:
  renfa run 'a*b' b aab ba            # one verdict per word
  renfa run 'a*' ''                   # the empty word
  renfa run -f expr.txt abc --format json"#,
        )
        .arg(expr_text_arg())
        .arg(expr_file_arg())
        .arg(words_arg())
        .arg(format_arg())
}
