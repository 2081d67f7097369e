//! # edi2xml
//!
//! Command-line driver for the EDIFACT ORDERS to XML converter.
//!
//! `run` converts every `.edi` file in the inbox, `convert` handles a
//! single file without moving it, and `parse` dumps the parsed order as
//! JSON.

mod config;
mod logging;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use edi_adapter_edifact::{OrderParser, read_segments};
use edi_adapter_xml::XmlGenerator;
use edi_order::{EventSink, OrderRecord, TracingSink};
use edi_pipeline::{BatchRunner, NamingMode};
use tracing::{error, info};

use crate::config::{AppConfig, Overrides};
use crate::logging::Console;

/// Exit code for configuration and logging setup failures
const EXIT_CONFIG: u8 = 2;

#[derive(Parser)]
#[command(name = "edi2xml")]
#[command(about = "Convert EDIFACT purchase orders to XML")]
#[command(version)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Append log lines to this file as well as the console
    #[arg(long, env = "LOG_FILE", global = true)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. `info` or `edi2xml=debug`
    #[arg(long, env = "EDI2XML_LOG", global = true)]
    log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every EDI file in the inbox
    Run(RunArgs),

    /// Convert one EDI file without archiving it
    Convert {
        /// Input file path
        input: PathBuf,

        /// Output file path; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Indent the generated XML
        #[arg(long)]
        pretty: bool,
    },

    /// Print the parsed order as JSON
    Parse {
        /// Input file path
        input: PathBuf,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Directory scanned for `.edi` files
    #[arg(long, env = "INBOX_DIR")]
    inbox: Option<PathBuf>,

    /// Directory receiving generated XML
    #[arg(long, env = "OUTBOX_DIR")]
    outbox: Option<PathBuf>,

    /// Directory receiving converted inputs
    #[arg(long, env = "ARCHIVE_DIR")]
    archive: Option<PathBuf>,

    /// Directory receiving failed inputs
    #[arg(long, env = "ERROR_DIR")]
    error: Option<PathBuf>,

    /// Process only the first file and name the output by timestamp alone
    #[arg(long)]
    single: bool,

    /// Indent the generated XML
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        let mut overrides = Overrides {
            log_file: self.log_file.clone(),
            log_level: self.log_level.clone(),
            ..Overrides::default()
        };
        if let Commands::Run(args) = &self.command {
            overrides.inbox_dir = args.inbox.clone();
            overrides.outbox_dir = args.outbox.clone();
            overrides.archive_dir = args.archive.clone();
            overrides.error_dir = args.error.clone();
        }
        overrides
    }

    fn console(&self) -> Console {
        match &self.command {
            Commands::Run(_) | Commands::Convert { output: Some(_), .. } => Console::Stdout,
            Commands::Convert { output: None, .. } | Commands::Parse { .. } => Console::Stderr,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref(), cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    if let Err(e) = logging::init(&config.log_level, config.log_file.as_deref(), cli.console()) {
        eprintln!("error: {e}");
        return ExitCode::from(EXIT_CONFIG);
    }

    let result = match cli.command {
        Commands::Run(args) => run(&config, &args),
        Commands::Convert {
            input,
            output,
            pretty,
        } => convert(&input, output.as_deref(), pretty),
        Commands::Parse { input, pretty } => parse(&input, pretty),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig, args: &RunArgs) -> anyhow::Result<()> {
    let dirs = config.directories();
    dirs.validate()?;
    dirs.ensure_output_dirs()
        .context("Cannot prepare output directories")?;

    let (limit, naming) = if args.single {
        (Some(1), NamingMode::Timestamp)
    } else {
        (None, NamingMode::Unique)
    };

    let sink = TracingSink;
    let summary = BatchRunner::new(dirs, &sink)
        .naming(naming)
        .limit(limit)
        .pretty(args.pretty)
        .run()?;

    if !summary.no_input {
        info!(
            "Converted {} of {} file(s) in {} ms",
            summary.converted.len(),
            summary.total(),
            summary.duration.as_millis()
        );
    }
    Ok(())
}

fn convert(input: &Path, output: Option<&Path>, pretty: bool) -> anyhow::Result<()> {
    let sink = TracingSink;
    let order = load_order(input, &sink)?;
    let xml = XmlGenerator::new()
        .pretty(pretty)
        .generate(&order, &sink)
        .with_context(|| format!("Failed to generate XML for {}", input.display()))?;

    match output {
        Some(path) => {
            fs::write(path, xml)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            sink.info(&format!("XML file created: {}", path.display()));
        }
        None => std::io::stdout()
            .write_all(xml.as_bytes())
            .context("Failed to write to stdout")?,
    }
    Ok(())
}

fn parse(input: &Path, pretty: bool) -> anyhow::Result<()> {
    let order = load_order(input, &TracingSink)?;
    let json = if pretty {
        serde_json::to_string_pretty(&order)?
    } else {
        serde_json::to_string(&order)?
    };
    println!("{json}");
    Ok(())
}

fn load_order(input: &Path, sink: &dyn EventSink) -> anyhow::Result<OrderRecord> {
    let segments = read_segments(input, sink)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    Ok(OrderParser::new().parse(&segments, sink))
}
