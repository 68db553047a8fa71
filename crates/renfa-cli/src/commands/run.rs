use renfa_lib::NoopTracer;
use serde::Serialize;

use super::expr_loader::ExprSource;
use super::run_common::{convert_or_exit, load_or_exit, print_json};
use crate::cli::OutputFormat;

pub struct RunArgs {
    pub source: ExprSource,
    pub words: Vec<String>,
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct Verdict<'a> {
    word: &'a str,
    accepted: bool,
}

pub fn run(args: RunArgs) {
    let text = load_or_exit(&args.source);
    let automaton = convert_or_exit(&text, &mut NoopTracer, false);

    let verdicts: Vec<Verdict<'_>> = args
        .words
        .iter()
        .map(|word| Verdict {
            word,
            accepted: automaton.accepts(word),
        })
        .collect();
    log::debug!(
        "{} of {} words accepted",
        verdicts.iter().filter(|v| v.accepted).count(),
        verdicts.len()
    );

    match args.format {
        OutputFormat::Text => {
            for verdict in &verdicts {
                let label = if verdict.accepted { "accept" } else { "reject" };
                println!("{}\t{}", label, verdict.word);
            }
        }
        OutputFormat::Json => print_json(&verdicts),
    }
}
