//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_repository::{write_trades, CsvRepository};
use crate::adapters::delimited_splitter::DelimitedSplitter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::fixed_width_splitter::FixedWidthSplitter;
use crate::adapters::line_reader::{FileReader, StdinReader};
use crate::adapters::logger::{NullLogger, StderrLogger};
use crate::adapters::trade_mapper::TradeMapper;
use crate::adapters::trade_validator::TradeValidator;
use crate::domain::config_validation::validate_pipeline_config;
use crate::domain::error::TradepipeError;
use crate::domain::pipeline::{ProcessSummary, RecordPipeline};
use crate::domain::settings::{OutputKind, PipelineSettings, SplitMode};
use crate::domain::trade::TradeRecord;
use crate::ports::config_port::ConfigPort;
use crate::ports::logger_port::LoggerPort;
use crate::ports::reader_port::ReaderPort;
use crate::ports::repository_port::RepositoryPort;
use crate::ports::splitter_port::SplitterPort;

/// Input path that selects standard input.
pub const STDIN_PATH: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "tradepipe", about = "Parse, validate and store raw trade records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Process a batch of raw trade records
    Run {
        #[arg(short, long)]
        config: PathBuf,
        /// Input file, or "-" for stdin (overrides [input] path)
        #[arg(short, long)]
        input: Option<String>,
        /// Output location (overrides [output] path)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print accepted trades as CSV on stdout instead of storing them
        #[arg(long)]
        dry_run: bool,
    },
    /// Validate a pipeline configuration
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Run {
            config,
            input,
            output,
            dry_run,
        } => run_pipeline(&config, input.as_deref(), output.as_ref(), dry_run),
        Command::Validate { config } => run_validate(&config),
    }
}

fn fail(err: TradepipeError) -> ExitCode {
    eprintln!("error: {err}");
    (&err).into()
}

pub fn load_config(path: &Path) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(fail)
}

pub fn build_splitter(split: &SplitMode) -> Result<Box<dyn SplitterPort>, TradepipeError> {
    let splitter: Box<dyn SplitterPort> = match split {
        SplitMode::Delimited { delimiter } => Box::new(DelimitedSplitter::new(*delimiter)),
        SplitMode::FixedWidth { widths } => Box::new(FixedWidthSplitter::new(widths.clone())?),
    };
    Ok(splitter)
}

pub fn build_reader(
    input: Option<&str>,
    skip_blank: bool,
) -> Result<Box<dyn ReaderPort>, TradepipeError> {
    match input {
        None => Err(TradepipeError::ConfigMissing {
            section: "input".into(),
            key: "path".into(),
        }),
        Some(STDIN_PATH) => Ok(Box::new(StdinReader::new(skip_blank))),
        Some(path) => Ok(Box::new(
            FileReader::new(PathBuf::from(path)).skip_blank(skip_blank),
        )),
    }
}

#[cfg_attr(not(feature = "sqlite"), allow(unused_variables))]
pub fn build_repository(
    kind: OutputKind,
    output: Option<&Path>,
    config: &dyn ConfigPort,
) -> Result<Box<dyn RepositoryPort>, TradepipeError> {
    let path = output.ok_or_else(|| TradepipeError::ConfigMissing {
        section: "output".into(),
        key: "path".into(),
    })?;

    match kind {
        OutputKind::Csv => Ok(Box::new(CsvRepository::new(path.to_path_buf()))),
        #[cfg(feature = "sqlite")]
        OutputKind::Sqlite => {
            use crate::adapters::sqlite_repository::SqliteRepository;

            let repo = SqliteRepository::from_config(config, path)?;
            repo.initialize_schema()?;
            Ok(Box::new(repo))
        }
        #[cfg(not(feature = "sqlite"))]
        OutputKind::Sqlite => Err(TradepipeError::ConfigInvalid {
            section: "output".into(),
            key: "kind".into(),
            reason: "sqlite output requires the sqlite feature".into(),
        }),
    }
}

/// Reads every raw line and runs it through the trade pipeline.
pub fn process_input(
    settings: &PipelineSettings,
    reader: &dyn ReaderPort,
    logger: &dyn LoggerPort,
) -> Result<(Vec<TradeRecord>, ProcessSummary), TradepipeError> {
    let lines = reader.read_data()?;
    let pipeline = RecordPipeline::new(
        build_splitter(&settings.split)?,
        TradeValidator::new(),
        TradeMapper::new(settings.lot_size),
    );
    pipeline.process_with_summary(&lines, logger)
}

fn run_pipeline(
    config_path: &Path,
    input_override: Option<&str>,
    output_override: Option<&PathBuf>,
    dry_run: bool,
) -> ExitCode {
    // Stage 1: Load and validate config
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    if let Err(e) = validate_pipeline_config(&adapter) {
        return fail(e);
    }
    let settings = match PipelineSettings::from_config(&adapter) {
        Ok(s) => s,
        Err(e) => return fail(e),
    };

    let logger: &dyn LoggerPort = if settings.quiet {
        &NullLogger
    } else {
        &StderrLogger
    };

    // Stage 2: Resolve input and read, split, validate, map
    let input = input_override.or(settings.input_path.as_deref());
    let reader = match build_reader(input, settings.skip_blank) {
        Ok(r) => r,
        Err(e) => return fail(e),
    };
    eprintln!("Reading records from {}", input.unwrap_or(STDIN_PATH));

    let (trades, summary) = match process_input(&settings, reader.as_ref(), logger) {
        Ok(out) => out,
        Err(e) => return fail(e),
    };
    eprintln!(
        "Processed {} records: {} accepted, {} rejected",
        summary.total, summary.accepted, summary.rejected
    );

    // Stage 3: Store or print
    if dry_run {
        if let Err(e) = write_trades(io::stdout().lock(), &trades) {
            return fail(TradepipeError::Storage {
                reason: format!("failed to write stdout: {e}"),
            });
        }
        eprintln!("\nDry run complete: nothing stored");
        return ExitCode::SUCCESS;
    }

    let output = output_override
        .cloned()
        .or_else(|| settings.output_path.as_ref().map(PathBuf::from));
    let repository = match build_repository(settings.output_kind, output.as_deref(), &adapter) {
        Ok(r) => r,
        Err(e) => return fail(e),
    };
    if let Err(e) = repository.store_records(&trades, logger) {
        return fail(e);
    }

    if let Some(path) = output {
        eprintln!("\nTrades written to: {}", path.display());
    }
    ExitCode::SUCCESS
}

fn run_validate(config_path: &Path) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    if let Err(e) = validate_pipeline_config(&adapter) {
        return fail(e);
    }
    let settings = match PipelineSettings::from_config(&adapter) {
        Ok(s) => s,
        Err(e) => return fail(e),
    };

    eprintln!("\nParser:");
    match &settings.split {
        SplitMode::Delimited { delimiter } => {
            eprintln!("  mode:      delimited");
            eprintln!("  delimiter: {:?}", *delimiter as char);
        }
        SplitMode::FixedWidth { widths } => {
            eprintln!("  mode:      fixed");
            eprintln!("  widths:    {:?}", widths);
        }
    }
    eprintln!("\nMapper:");
    eprintln!("  lot_size:  {}", settings.lot_size);
    eprintln!("\nOutput:");
    eprintln!("  kind:      {:?}", settings.output_kind);
    eprintln!(
        "  path:      {}",
        settings.output_path.as_deref().unwrap_or("(not set)")
    );

    eprintln!("\nConfiguration is valid");
    ExitCode::SUCCESS
}
