mod cli;
mod commands;

use cli::{CheckParams, ConvertParams, RunParams, build_cli};

fn main() {
    env_logger::init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("convert", m)) => {
            let params = ConvertParams::from_matches(m);
            commands::convert::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("run", m)) => {
            let params = RunParams::from_matches(m);
            commands::run::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
