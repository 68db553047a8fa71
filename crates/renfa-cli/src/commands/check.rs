use renfa_lib::{Converter, NoopTracer};

use super::expr_loader::ExprSource;
use super::run_common::{exit_with, load_or_exit};

pub struct CheckArgs {
    pub source: ExprSource,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let text = load_or_exit(&args.source);

    if let Err(err) = Converter::new(&text, &mut NoopTracer) {
        exit_with(&err, args.color);
    }

    // Silent on success (like cargo check)
}
