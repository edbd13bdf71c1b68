use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use wstrip::Error;

/// Strip surrounding whitespace from a file and end it with a single newline.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// File to rewrite in place.
    #[arg(value_name = "PATH")]
    path: PathBuf,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Parses the command line. Help, version and malformed invocations are
/// reported by clap itself; only a missing path becomes an `Error`.
fn parse_cli<I, T>(args: I) -> Result<Cli, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::MissingRequiredArgument => Error::MissingArgument,
        _ => err.exit(),
    })
}

fn run() -> Result<(), Error> {
    let cli = parse_cli(std::env::args_os())?;
    wstrip::normalize(&cli.path)
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
