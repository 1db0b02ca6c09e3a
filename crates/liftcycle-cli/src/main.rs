use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use liftcycle_config::{Config, ConfigError};
use liftcycle_engine::{
    CyclePosition, DEFAULT_CYCLE_START, WorkoutStore, coming_soon, export::long_date,
    export_file_name, export_text, format_workout, render_document_as_plain_markup, workout_for,
};
use std::{
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(
    name = "liftcycle",
    version,
    about = "Shows the workout for a day of the six-week training cycle"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Workout content JSON, overriding `content_path` from the config file
    #[arg(long, global = true, env = "LIFTCYCLE_CONTENT")]
    content: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the formatted workout
    Show {
        /// Day to look up (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Print the stored text without formatting
        #[arg(long)]
        raw: bool,
    },
    /// Write the formatted workout to a text file
    Export {
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Output file, defaults to `workout-<date>.txt` in the current directory
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print the cycle week and day for a date
    Position {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Write the config file pointing at a workout content JSON
    Init {
        content_path: PathBuf,

        /// Date that was Week 1, Day 1 (YYYY-MM-DD)
        #[arg(long)]
        cycle_start: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Show { date, raw } => {
            let config = resolve_config(Config::load(), cli.content.is_none());
            let date = date.unwrap_or_else(today);
            let position = CyclePosition::on(date, cycle_start(config.as_ref()));
            let store = load_store(&content_path(cli.content, config))?;
            println!("{}", workout_body(&store, position, raw).trim_end());
        }
        Command::Export { date, output } => {
            let config = resolve_config(Config::load(), cli.content.is_none());
            let date = date.unwrap_or_else(today);
            let position = CyclePosition::on(date, cycle_start(config.as_ref()));
            let store = load_store(&content_path(cli.content, config))?;

            let text = export_text(date, position, &workout_body(&store, position, false));
            let output = output.unwrap_or_else(|| PathBuf::from(export_file_name(date)));
            std::fs::write(&output, text)
                .with_context(|| format!("Failed to write workout to {}", output.display()))?;
            println!("Wrote {}", output.display());
        }
        Command::Position { date } => {
            let config = resolve_config(Config::load(), false);
            let date = date.unwrap_or_else(today);
            let position = CyclePosition::on(date, cycle_start(config.as_ref()));
            println!(
                "{}\nWeek {}, Day {} ({})",
                long_date(date),
                position.week,
                position.day,
                position.day_name()
            );
        }
        Command::Init {
            content_path,
            cycle_start,
        } => {
            let config = init_config(content_path, cycle_start);
            config.save().with_context(|| {
                format!(
                    "Failed to write config file {}",
                    Config::config_path().display()
                )
            })?;
            println!("Wrote {}", Config::config_path().display());
        }
    }

    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Unwraps a config load result. A broken config is only fatal when the
/// command has no other way to find its content.
fn resolve_config(loaded: Result<Option<Config>, ConfigError>, fatal: bool) -> Option<Config> {
    match loaded {
        Ok(config) => config,
        Err(e) if !fatal => {
            log::warn!("Ignoring config file: {e}");
            None
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: liftcycle --content <workouts.json> <COMMAND>");
            process::exit(1);
        }
    }
}

fn cycle_start(config: Option<&Config>) -> NaiveDate {
    let start = config.map_or(DEFAULT_CYCLE_START, |config| config.cycle_start);
    log::debug!("cycle start: {start}");
    start
}

fn init_config(content_path: PathBuf, cycle_start: Option<NaiveDate>) -> Config {
    let mut config = Config::new(content_path);
    if let Some(start) = cycle_start {
        config.cycle_start = start;
    }
    config
}

fn content_path(arg: Option<PathBuf>, config: Option<Config>) -> PathBuf {
    if let Some(path) = arg.or_else(|| config.map(|c| c.content_path)) {
        return path;
    }

    eprintln!("Error: No workout content provided and no config file found");
    eprintln!("Usage: liftcycle --content <workouts.json> <COMMAND>");
    eprintln!(
        "Or create a config file at {} containing content_path = \"<workouts.json>\"",
        Config::config_path().display()
    );
    process::exit(1);
}

fn load_store(path: &Path) -> Result<WorkoutStore> {
    WorkoutStore::load_from_path(path)
        .with_context(|| format!("Failed to load workout content from {}", path.display()))
}

/// Formatted workout text, or the stored text as-is when it has no lettered sections.
fn workout_body(store: &WorkoutStore, position: CyclePosition, raw: bool) -> String {
    match workout_for(store, position) {
        Ok(text) => {
            if raw {
                return text.to_string();
            }
            let doc = format_workout(text);
            if doc.is_empty() {
                text.to_string()
            } else {
                render_document_as_plain_markup(&doc)
            }
        }
        Err(missing) => {
            log::info!("{missing}");
            coming_soon(position)
        }
    }
}
