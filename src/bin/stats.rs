use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::{debug, info, LevelFilter};
use serde::Serialize;

use embedded_course::stats::sort_descending;
use embedded_course::{logger, CourseConfig, CourseError, Platform, Reporter, Statistics};

#[derive(Parser, Debug)]
#[command(name = "stats", about = "Statistical analysis of an unsigned byte data set")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Platform to behave as; overrides the config file
    #[arg(long, value_enum)]
    platform: Option<Platform>,

    /// Print the sorted set and its statistics as JSON
    #[arg(long)]
    json: bool,

    /// Suppress the diagnostic printout
    #[arg(long, short)]
    quiet: bool,

    /// Log level (error, warn, info, debug, trace); overrides the config file
    #[arg(long)]
    log_level: Option<LevelFilter>,

    /// Values to analyse instead of the configured data set
    values: Vec<u8>,
}

#[derive(Serialize)]
struct JsonReport {
    data_set: Vec<u8>,
    statistics: Statistics,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = CourseConfig::load_or_default(args.config.as_deref())
        .context("failed to load configuration")?;
    let level = match args.log_level {
        Some(level) => level,
        None => config.level_filter()?,
    };
    logger::init(level).context("failed to install logger")?;

    let mut data = if args.values.is_empty() {
        config.data_set.clone()
    } else {
        args.values
    };
    debug!("analysing {} values", data.len());

    if args.json {
        let statistics = Statistics::compute(&mut data).ok_or(CourseError::EmptyDataSet)?;
        let report = JsonReport {
            data_set: data,
            statistics,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let platform = args.platform.unwrap_or(config.platform);
    let mut reporter = Reporter::stdout(platform, config.verbose && !args.quiet);
    if !reporter.is_enabled() {
        info!("diagnostic printing is disabled for platform {platform}");
    }

    reporter.line(&"Array before sorting:".bold().to_string())?;
    reporter.print_array(&data)?;

    sort_descending(&mut data);
    reporter.line(&"Array after sorting:".bold().to_string())?;
    reporter.print_array(&data)?;

    reporter.line(&"Performing Statistical Analysis...".bold().to_string())?;
    reporter.print_statistics(&mut data)?;

    Ok(())
}
