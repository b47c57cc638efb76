//! Ziguana - Entry Point
//!
//! Sets up logging, parses arguments, merges settings and prints the
//! dispatched value.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use ziguana::Benjamin;
use ziguana::config::{self, DEFAULT_CONFIG_FILE, Settings};
use ziguana::dispatch::{FALLBACK_VALUE, Variant};
use ziguana::report::{OutputFormat, Report};

/// Awesomeness calculator with a fixed code dispatch table.
#[derive(Parser, Debug)]
#[command(name = "ziguana")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Code to dispatch.
    #[arg(short, long, allow_negative_numbers = true)]
    code: Option<i32>,

    /// Dispatch table to use.
    #[arg(short, long, value_enum)]
    variant: Option<Variant>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Compute the result without printing it.
    #[arg(short, long)]
    quiet: bool,

    /// Settings file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log level: trace, debug, info, warn, error.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the dispatch table.
    Table {
        /// Table to print; defaults to the configured one.
        #[arg(short, long, value_enum)]
        variant: Option<Variant>,
    },
    /// Write a default settings file.
    Config,
}

impl Args {
    /// Parses the log level string into a tracing Level.
    fn parse_log_level(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            other => anyhow::bail!("invalid log level: {}", other),
        }
    }

    /// Applies command-line overrides on top of file settings.
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(code) = self.code {
            settings.code = code;
        }
        if let Some(variant) = self.variant {
            settings.variant = variant;
        }
        if self.quiet {
            settings.print = false;
        }
        settings
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(level: Level) -> Result<()> {
    // Create an env filter that respects RUST_LOG but has a default level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ziguana={level}")));

    // Logs go to stderr; stdout carries only the result
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = args.parse_log_level()?;
    init_tracing(log_level)?;

    if let Some(Command::Config) = args.command {
        config::init(&args.config).context(format!(
            "failed to write settings file: {}",
            args.config.display()
        ))?;
        println!("Created {}", args.config.display());
        return Ok(());
    }

    let settings = Settings::load(&args.config).context(format!(
        "failed to load settings file: {}",
        args.config.display()
    ))?;
    let settings = args.apply(settings);

    if let Some(Command::Table { variant }) = args.command {
        let variant = variant.unwrap_or(settings.variant);
        for (code, value) in variant.table() {
            println!("{code}\t{value}");
        }
        println!("*\t{FALLBACK_VALUE}");
        return Ok(());
    }

    info!(
        code = settings.code,
        variant = %settings.variant,
        "dispatching"
    );

    let report = Report::new(&Benjamin::new(), settings.variant, settings.code);
    if settings.print {
        println!("{}", report.render(args.format)?);
    } else {
        info!(value = report.value, "result discarded");
    }

    Ok(())
}
