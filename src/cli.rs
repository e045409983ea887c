//! Command line interface

use std::io;

use crate::analyze;

///Usage line printed when network is not supplied
pub const USAGE: &str = "Usage: subnet-calc <network>";
///Example line printed when network is not supplied
pub const EXAMPLE: &str = "Example: subnet-calc 192.168.1.0/24";

/// IPv4 subnet calculator
#[derive(clap::Parser, Debug)]
#[command(name = "subnet-calc", author, version, about, long_about = None)]
pub struct Args {
    /// Network in CIDR notation (e.g., 192.168.1.0/24)
    #[arg(value_name = "NETWORK", conflicts_with = "network")]
    pub cidr: Option<String>,

    /// Network in CIDR notation, alternative to positional argument
    #[arg(short = 'n', long = "network", value_name = "NETWORK")]
    pub network: Option<String>,

    /// Exit with non-zero status if network cannot be parsed
    #[arg(long)]
    pub fail_on_error: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    ///Returns supplied network, empty value is treated as missing
    pub fn network(&self) -> Option<&str> {
        self.cidr
            .as_deref()
            .or(self.network.as_deref())
            .filter(|network| !network.is_empty())
    }

    ///Returns default log filter for `env_logger`
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
///Outcome of single run
pub enum Status {
    ///Report is printed
    Success,
    ///Network argument is not supplied
    MissingNetwork,
    ///Network argument cannot be parsed
    InvalidNetwork,
}

impl Status {
    #[inline]
    ///Returns process exit code
    ///
    ///Parse failure exits with `0` unless `fail_on_error` is set
    pub const fn exit_code(self, fail_on_error: bool) -> u8 {
        match self {
            Self::Success => 0,
            Self::MissingNetwork => 1,
            Self::InvalidNetwork => if fail_on_error { 1 } else { 0 },
        }
    }
}

///Analyzes network from `args` and writes result into `out`
///
///Returns `Err` only if writing into `out` fails
pub fn run<W: io::Write>(args: &Args, out: &mut W) -> io::Result<Status> {
    let network = match args.network() {
        Some(network) => network,
        None => {
            log::warn!("Network is not provided");
            writeln!(out, "Error: No network provided.")?;
            writeln!(out, "{USAGE}")?;
            writeln!(out, "{EXAMPLE}")?;
            return Ok(Status::MissingNetwork);
        }
    };

    match analyze(network) {
        Ok(report) => {
            log::info!("Analyzed '{network}'");
            write!(out, "{report}")?;
            Ok(Status::Success)
        }
        Err(error) => {
            log::info!("Failed to parse '{network}': {error:?}");
            writeln!(out, "Error: {error}")?;
            Ok(Status::InvalidNetwork)
        }
    }
}
