mod cli;
mod commands;
mod config;
mod discovery;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod discovery_tests;

use cli::{CheckParams, EmitParams, GenerateParams, IrParams, build_cli, verbosity};
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = build_cli().get_matches();
    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this");
    };

    init_tracing(verbosity(m));

    match name {
        "generate" => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        "check" => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        "ir" => {
            let params = IrParams::from_matches(m);
            commands::ir::run(params.into());
        }
        "emit" => {
            let params = EmitParams::from_matches(m);
            commands::emit::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
