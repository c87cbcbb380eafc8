//! DSE Report CLI Application
//!
//! Command-line front end for the dse-result-reader library. It adds:
//! - Argument parsing (exactly one result directory)
//! - Decision model selection by preset, tag or config file
//! - Report destination (stdout or a file)

use anyhow::{Context, Result};
use clap::Parser;
use dse_result_reader::ResultReader;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

mod config;

use config::{AppConfig, DecisionModelConfig};

/// DSE Report - Summarize design space exploration results
#[derive(Parser, Debug)]
#[command(name = "dse-report")]
#[command(about = "Summarize DSE result files: actor mappings, timing and PE schedules", long_about = None)]
#[command(version)]
struct Args {
    /// Directory containing the DSE result files
    #[arg(value_name = "DIR")]
    dir: PathBuf,

    /// Decision model preset (multicore, multicore-and-pl)
    #[arg(short = 'm', long, value_name = "PRESET")]
    decision_model: Option<String>,

    /// Custom decision model tag matched against file names
    #[arg(short, long, value_name = "TAG")]
    tag: Option<String>,

    /// Merge the programmable logic area mapping into the actor mapping
    #[arg(long, overrides_with = "no_logic_area_mapping")]
    logic_area_mapping: bool,

    /// Ignore the programmable logic area mapping
    #[arg(long)]
    no_logic_area_mapping: bool,

    /// Print the average execution time of each actor
    #[arg(long, overrides_with = "no_average_execution_time")]
    average_execution_time: bool,

    /// Omit the average execution time line
    #[arg(long)]
    no_average_execution_time: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output file for the report (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    /// Decision model settings given on the command line
    fn decision_model_overrides(&self) -> DecisionModelConfig {
        DecisionModelConfig {
            preset: self.decision_model.clone(),
            tag: self.tag.clone(),
            logic_area_mapping: switch(self.logic_area_mapping, self.no_logic_area_mapping),
            average_execution_time: switch(
                self.average_execution_time,
                self.no_average_execution_time,
            ),
        }
    }

    /// Report destination: `--output` wins over the config file
    fn output_path<'a>(&'a self, config: &'a AppConfig) -> Option<&'a Path> {
        self.output
            .as_deref()
            .or(config.output.file.as_deref())
    }
}

/// Collapse a `--flag` / `--no-flag` pair; `None` if neither was given
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn main() -> Result<()> {
    // Usage errors exit here with status 2
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("DSE Report CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using reader library v{}", dse_result_reader::VERSION);

    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };
    config.decision_model.merge(args.decision_model_overrides());

    let model = config.decision_model.resolve()?;
    log::debug!("Decision model: {:?}", model);

    let reader = ResultReader::new(model);
    run_report(&reader, &args.dir, args.output_path(&config))
}

/// Load every result file of `dir`, then render to `output` or stdout
///
/// The output file is only created once all results parsed.
fn run_report(reader: &ResultReader, dir: &Path, output: Option<&Path>) -> Result<()> {
    let solutions = reader
        .load(dir)
        .with_context(|| format!("Failed to read DSE results from {:?}", dir))?;

    match output {
        Some(path) => {
            write_to_file(reader, &solutions, path)?;
            eprintln!("Report written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            reader.render(&solutions, &mut out)?;
        }
    }

    Ok(())
}

/// Render the report into a newly created file
fn write_to_file(
    reader: &ResultReader,
    solutions: &[dse_result_reader::Solution],
    path: &Path,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {:?}", path))?;
    let mut out = BufWriter::new(file);

    reader
        .render(solutions, &mut out)
        .with_context(|| format!("Failed to write report to {:?}", path))?;
    out.flush()?;

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
