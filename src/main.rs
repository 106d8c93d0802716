use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bplog_core::Config;
use clap::Parser;

const USAGE: &str = "Usage: bplogrestore source.csv target.log";

#[derive(Parser)]
#[command(
    name = "bplogrestore",
    version,
    about = "Restore contact-center platform logs from a log-search CSV export"
)]
struct Cli {
    /// CSV export to read (first row is a header).
    source: Option<OsString>,
    /// Log file to create or truncate.
    target: Option<OsString>,
    /// Extra positionals are accepted and ignored.
    #[arg(hide = true)]
    _rest: Vec<OsString>,
    /// Write debug logs to stderr (RUST_LOG overrides the filter).
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let (Some(source), Some(target)) = (non_empty(cli.source), non_empty(cli.target)) else {
        println!("{USAGE}");
        return ExitCode::from(1);
    };

    match run(&source, &target) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

/// An empty argument counts as missing.
fn non_empty(arg: Option<OsString>) -> Option<PathBuf> {
    arg.filter(|a| !a.is_empty()).map(PathBuf::from)
}

fn run(source: &Path, target: &Path) -> anyhow::Result<()> {
    let summary = bplog_core::convert(source, target, &Config::defaults())?;
    tracing::debug!(records = summary.records, "done");
    Ok(())
}
