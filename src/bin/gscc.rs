//! `gscc` - the native CLI driver around `gsc-core`. Argument parsing,
//! typed-AST discovery/deserialization, and writing emitted files to disk
//! are ambient plumbing; the compiler itself is the pure
//! `gsc_core::compile` function this binary calls exactly once.

mod args;
mod driver;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .init();

    let args = args::Args::parse();
    match driver::run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
