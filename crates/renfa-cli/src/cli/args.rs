//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that commands compose as needed.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Inline expression text (positional).
pub fn expr_text_arg() -> Arg {
    Arg::new("expr_text")
        .value_name("EXPR")
        .help("Regular expression (prompted for when omitted)")
}

/// Expression file (-f/--file).
pub fn expr_file_arg() -> Arg {
    Arg::new("expr_file")
        .short('f')
        .long("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Read the expression from a file ('-' for stdin)")
}

/// Words to simulate (positional, after EXPR).
pub fn words_arg() -> Arg {
    Arg::new("words")
        .value_name("WORD")
        .num_args(1..)
        .help("Words to test against the automaton")
}

/// Narrate construction (--steps).
pub fn steps_arg() -> Arg {
    Arg::new("steps")
        .long("steps")
        .action(ArgAction::SetTrue)
        .help("Print each construction step before the result")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
