//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields
//! - `From<*Params>` impls bridge dispatch to the command handlers
//! - `run -f` shifts the first positional from EXPR to the words

use std::path::PathBuf;

use clap::ArgMatches;

use super::{ColorChoice, OutputFormat};
use crate::commands::check::CheckArgs;
use crate::commands::convert::ConvertArgs;
use crate::commands::expr_loader::ExprSource;
use crate::commands::run::RunArgs;

pub struct ConvertParams {
    pub expr_file: Option<PathBuf>,
    pub expr_text: Option<String>,
    pub steps: bool,
    pub format: OutputFormat,
    pub color: ColorChoice,
}

impl ConvertParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expr_file: m.get_one::<PathBuf>("expr_file").cloned(),
            expr_text: m.get_one::<String>("expr_text").cloned(),
            steps: m.get_flag("steps"),
            format: parse_format(m),
            color: parse_color(m),
        }
    }
}

impl From<ConvertParams> for ConvertArgs {
    fn from(p: ConvertParams) -> Self {
        Self {
            source: ExprSource::new(p.expr_file, p.expr_text),
            steps: p.steps,
            format: p.format,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub expr_file: Option<PathBuf>,
    pub expr_text: Option<String>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expr_file: m.get_one::<PathBuf>("expr_file").cloned(),
            expr_text: m.get_one::<String>("expr_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            source: ExprSource::new(p.expr_file, p.expr_text),
            color: p.color.should_colorize(),
        }
    }
}

pub struct RunParams {
    pub expr_file: Option<PathBuf>,
    pub expr_text: Option<String>,
    pub words: Vec<String>,
    pub format: OutputFormat,
}

impl RunParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let expr_file = m.get_one::<PathBuf>("expr_file").cloned();
        let expr_text = m.get_one::<String>("expr_text").cloned();
        let words: Vec<String> = m
            .get_many::<String>("words")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        let (expr_text, words) = shift_positional_to_words(expr_file.is_some(), expr_text, words);

        Self {
            expr_file,
            expr_text,
            words,
            format: parse_format(m),
        }
    }
}

impl From<RunParams> for RunArgs {
    fn from(p: RunParams) -> Self {
        Self {
            source: ExprSource::new(p.expr_file, p.expr_text),
            words: p.words,
            format: p.format,
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}

/// With an expression file, the first positional is a word, not EXPR.
/// This enables: `renfa run -f expr.txt aab`
fn shift_positional_to_words(
    has_expr_file: bool,
    expr_text: Option<String>,
    mut words: Vec<String>,
) -> (Option<String>, Vec<String>) {
    match expr_text {
        Some(first) if has_expr_file => {
            words.insert(0, first);
            (None, words)
        }
        expr_text => (expr_text, words),
    }
}
