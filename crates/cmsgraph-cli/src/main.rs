mod cli;
mod commands;

use cli::{CheckParams, FragmentsParams, QueryParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("fragments", m)) => {
            let params = FragmentsParams::from_matches(m);
            init_logging(params.verbose);
            commands::fragments::run(params.into());
        }
        Some(("query", m)) => {
            let params = QueryParams::from_matches(m);
            init_logging(params.verbose);
            commands::query::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            init_logging(params.verbose);
            commands::check::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        format!("cmsgraph={level},cmsgraph_compiler={level},cmsgraph_core={level}")
    });
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .init();
}
