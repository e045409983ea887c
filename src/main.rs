use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use subnet_calc::cli::{self, Args};

fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG takes precedence over -v
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level())).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = cli::run(&args, &mut out).and_then(|status| out.flush().map(|_| status));

    match result {
        Ok(status) => ExitCode::from(status.exit_code(args.fail_on_error)),
        Err(error) => {
            log::error!("Failed to write output: {error}");
            ExitCode::FAILURE
        }
    }
}
