// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{FileConfig, RenameConfig, load_config};
use crate::core::fs::DiskFs;
use crate::core::pipeline::execute;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory whose subdirectories are renamed (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recurse: bool,

    /// Remove spaces from names
    #[arg(short = 'w', long)]
    pub remove_whitespace: bool,

    /// Regex to remove from names; repeat to apply several in order
    #[arg(short = 'p', long = "pattern")]
    pub patterns: Vec<String>,

    /// Print the planned renames without touching the filesystem
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Config file to use instead of the nearest brn.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, default_value = "info", value_enum)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            Self::Trace => Some(tracing::Level::TRACE),
            Self::Debug => Some(tracing::Level::DEBUG),
            Self::Info => Some(tracing::Level::INFO),
            Self::Warn => Some(tracing::Level::WARN),
            Self::Error => Some(tracing::Level::ERROR),
            Self::Silent => None,
        }
    }
}

const SWITCHES: &[(&str, &str)] = &[
    ("-r", "--recurse"),
    ("-w", "--remove-whitespace"),
    ("-n", "--dry-run"),
    ("-h", "--help"),
    ("-V", "--version"),
];

const OPTIONS: &[(&str, &str)] = &[
    ("-p", "--pattern"),
    ("-d", "--directory"),
    ("-c", "--config"),
    ("-l", "--log-level"),
];

/// Command line split into what clap should see and what gets dropped.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NormalizedArgs {
    pub known: Vec<String>,
    pub ignored: Vec<String>,
}

/// Drops unrecognized arguments and rewrites known ones into `--long[=value]` form.
///
/// The argument after `-p` is always taken as the pattern, even when it
/// starts with `-`. Switches may repeat; for single-value options the last
/// occurrence wins, while patterns accumulate in order.
pub fn normalize_args<I>(raw: I) -> NormalizedArgs
where
    I: IntoIterator<Item = String>,
{
    let mut raw = raw.into_iter();
    let mut normalized = NormalizedArgs {
        known: raw.next().into_iter().collect(),
        ignored: Vec::new(),
    };

    while let Some(arg) = raw.next() {
        if let Some(&(_, long)) = SWITCHES.iter().find(|(s, l)| arg == *s || arg == *l) {
            if !normalized.known.iter().any(|known| known == long) {
                normalized.known.push(long.to_owned());
            }
            continue;
        }

        let option = OPTIONS.iter().find_map(|&(short, long)| {
            if arg == short || arg == long {
                Some((long, None))
            } else {
                arg.strip_prefix(long)
                    .and_then(|rest| rest.strip_prefix('='))
                    .map(|value| (long, Some(value.to_owned())))
            }
        });

        match option {
            Some((long, value)) => match value.or_else(|| raw.next()) {
                Some(value) => {
                    if long != "--pattern" {
                        let prefix = format!("{long}=");
                        normalized.known.retain(|known| !known.starts_with(&prefix));
                    }
                    normalized.known.push(format!("{long}={value}"));
                }
                None => normalized.ignored.push(arg),
            },
            None => normalized.ignored.push(arg),
        }
    }

    normalized
}

/// Merges file config and arguments. File patterns run before argument patterns.
///
/// # Errors
///
/// Returns an error if a pattern or exclude glob from either source is invalid.
pub fn build_config(args: &Args, file: FileConfig) -> Result<RenameConfig> {
    let mut config = RenameConfig::new(&args.directory)
        .with_patterns(&file.patterns)
        .context("Invalid pattern in config file")?
        .with_patterns(&args.patterns)?
        .with_exclude(&file.exclude)
        .context("Invalid exclude glob in config file")?;

    config.recurse = args.recurse || file.recurse;
    config.remove_whitespace = args.remove_whitespace || file.remove_whitespace;
    config.dry_run = args.dry_run || file.dry_run;

    Ok(config)
}

/// Runs one rename pass over `args.directory`.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be read or parsed
/// * A removal pattern or exclude glob is invalid
/// * A directory cannot be listed, or a rename fails
/// * A planned name would be empty
pub fn run(args: Args) -> Result<()> {
    let file_config = load_config(&args.directory, args.config.as_deref())?;
    let config = build_config(&args, file_config)?;

    execute(&DiskFs, &config).with_context(|| {
        format!("Failed to rename entries in: {}", args.directory.display())
    })?;

    Ok(())
}
