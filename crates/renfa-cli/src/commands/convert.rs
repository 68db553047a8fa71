use renfa_lib::{Colors, NarrationTracer, NoopTracer};

use super::expr_loader::ExprSource;
use super::run_common::{convert_or_exit, load_or_exit, print_json};
use crate::cli::OutputFormat;

pub struct ConvertArgs {
    pub source: ExprSource,
    pub steps: bool,
    pub format: OutputFormat,
    pub color: bool,
}

pub fn run(args: ConvertArgs) {
    let text = load_or_exit(&args.source);

    let automaton = if args.steps {
        let mut tracer = NarrationTracer::new();
        let automaton = convert_or_exit(&text, &mut tracer, args.color);
        // Keep stdout parseable for JSON.
        match args.format {
            OutputFormat::Text => println!("{}", tracer.output()),
            OutputFormat::Json => eprintln!("{}", tracer.output()),
        }
        automaton
    } else {
        convert_or_exit(&text, &mut NoopTracer, args.color)
    };

    match args.format {
        OutputFormat::Text => {
            let colors = Colors::new(args.color);
            print!("{}", automaton.printer().colors(colors).dump());
        }
        OutputFormat::Json => print_json(&automaton.quintuple()),
    }
}
