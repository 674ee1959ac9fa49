//! CLI entry point for vuln-codec-bench
//!
//! Runs the warm-up pass and the measured loop over the six codec adapters,
//! then prints one unmarshal, marshal and total series per adapter.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use vuln_codec_bench::config::CliArgs;
use vuln_codec_bench::{AppConfig, Harness};

/// Round-trip latency benchmark of JSON, YAML and XML codecs
#[derive(Parser)]
#[command(name = "vuln-codec-bench")]
#[command(version, about, long_about = None)]
struct Args {
    /// Measured iterations per adapter [default: 50]
    #[arg(short = 'n', long, value_name = "N")]
    iterations: Option<String>,

    /// Directory containing debian_vulns.{json,yaml,xml} [default: fixtures]
    #[arg(short, long, value_name = "DIR")]
    fixtures: Option<PathBuf>,

    /// Skip the untimed warm-up pass
    #[arg(long, action = ArgAction::SetTrue)]
    no_warmup: bool,

    /// Unit of the reported timings (ms or us) [default: ms]
    #[arg(short, long, value_name = "UNIT")]
    unit: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl From<&Args> for CliArgs {
    fn from(args: &Args) -> Self {
        Self {
            iterations: args.iterations.clone(),
            fixtures: args.fixtures.clone(),
            no_warmup: args.no_warmup,
            unit: args.unit.clone(),
        }
    }
}

impl Args {
    fn log_level(&self) -> Level {
        match self.verbose {
            0 if self.quiet => Level::ERROR,
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn init_tracing(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

/// The single measurement run; any error ends it
fn run(args: &Args) -> anyhow::Result<()> {
    let config = AppConfig::from_cli(CliArgs::from(args))?;
    let harness = Harness::from_config(&config).context("Failed to load fixtures")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = harness.run(&mut out)?;
    report.render(&mut out)?;
    writeln!(out, "FIN")?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_level());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
