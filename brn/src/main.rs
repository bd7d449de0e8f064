// src/main.rs
use anyhow::Result;
use brn::{Args, normalize_args};
use clap::Parser as _;
use std::env;
use tracing::debug;

fn main() -> Result<()> {
    let normalized = normalize_args(env::args());
    let args = Args::parse_from(normalized.known);
    setup_tracing(&args);

    for arg in &normalized.ignored {
        debug!("ignoring unrecognized argument `{arg}`");
    }
    debug!("Parsed CLI arguments: {args:?}");

    brn::run(args)
}

fn setup_tracing(args: &Args) {
    if let Some(level) = args.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .without_time()
            .with_target(false)
            .compact()
            .init();
    }
}
