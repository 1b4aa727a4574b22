use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{info, LevelFilter};

use embedded_course::data::{int_to_ascii, parse_ascii, MAX_ASCII_LEN};
use embedded_course::{logger, selftest, CourseConfig};

#[derive(Parser, Debug)]
#[command(name = "course1", about = "Course-1 memory and data conversion exercises")]
struct Args {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); overrides the config file
    #[arg(long, global = true)]
    log_level: Option<LevelFilter>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the verification suite over the memory and data modules
    Selftest,

    /// Convert an integer to its ASCII form
    Itoa {
        #[arg(allow_hyphen_values = true)]
        value: i32,

        /// Base between 2 and 16; defaults to the configured base
        #[arg(long)]
        base: Option<u32>,
    },

    /// Parse an ASCII number back into an integer
    Atoi {
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Base between 2 and 16; defaults to the configured base
        #[arg(long)]
        base: Option<u32>,
    },
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
    info!("platform {}, default base {}", config.platform, config.conversion.base);

    match args.command {
        Command::Selftest => {
            let outcomes = selftest::run_all();
            print!(
                "{}",
                selftest::format_report(&outcomes, logger::should_use_colors())
            );
            if !selftest::all_passed(&outcomes) {
                bail!("self-test failed: {}", selftest::format_summary(&outcomes));
            }
        }
        Command::Itoa { value, base } => {
            let base = base.unwrap_or(config.conversion.base);
            let mut buf = [0u8; MAX_ASCII_LEN];
            let length = int_to_ascii(value, &mut buf, base)
                .with_context(|| format!("cannot convert {value} in base {base}"))?;
            let text = String::from_utf8_lossy(&buf[..length - 1]);
            println!(
                "{} (base {base}, {length} bytes with terminator)",
                text.green()
            );
        }
        Command::Atoi { text, base } => {
            let base = base.unwrap_or(config.conversion.base);
            let value = parse_ascii(&text, base)
                .with_context(|| format!("cannot parse {text:?} in base {base}"))?;
            println!("{}", value.to_string().green());
        }
    }

    Ok(())
}
