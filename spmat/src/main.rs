use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use spmat::{ReportFormat, RunConfig};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Sparse matrix calculator - add, subtract or multiply two matrix files")]
struct Cli {
    /// Operation to apply: add, subtract or multiply
    operation: String,

    /// Left operand matrix file
    left: PathBuf,

    /// Right operand matrix file
    right: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output encoding
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Log loading and operation details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            operation: cli.operation,
            left: cli.left,
            right: cli.right,
            output: cli.output,
            format: cli.format,
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn execute(config: RunConfig) -> Result<()> {
    spmat::run(&config).with_context(|| {
        format!(
            "{} {} {}",
            config.operation,
            config.left.display(),
            config.right.display()
        )
    })?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute(cli.into()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
