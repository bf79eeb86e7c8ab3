//! `find-meeting` CLI — find free meeting times from a JSON schedule.
//!
//! ## Usage
//!
//! ```sh
//! # Free ranges as JSON (stdin → stdout)
//! cat schedule.json | find-meeting query
//!
//! # From file to file
//! find-meeting query -i schedule.json -o free.json
//!
//! # Human-readable, and say whether optional attendees were dropped
//! find-meeting query -i schedule.json --format text --explain
//!
//! # Validate a schedule without resolving it
//! find-meeting check -i schedule.json
//!
//! # Show resolver decisions on stderr
//! RUST_LOG=meeting_engine=debug find-meeting query -i schedule.json
//! ```

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_engine::{Pass, Resolution, Schedule};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "find-meeting",
    version,
    about = "Find the times in a day when a meeting can happen"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log resolver decisions to stderr (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a schedule into free time ranges
    Query {
        /// Input schedule JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Also report whether optional attendees had to be dropped
        #[arg(long)]
        explain: bool,
    },
    /// Validate a schedule and print a summary
    Check {
        /// Input schedule JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Pretty-printed JSON array of `{start, end}` ranges
    Json,
    /// One `[HH:MM, HH:MM) N min` line per range
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Query {
            input,
            output,
            format,
            explain,
        } => {
            let schedule = read_schedule(input.as_deref())?;
            let resolution = schedule.resolve();
            debug!(
                pass = ?resolution.pass,
                slots = resolution.slots.len(),
                "resolved schedule"
            );

            let rendered = match format {
                Format::Json => render_json(&resolution, explain)?,
                Format::Text => render_text(&resolution, explain),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check { input } => {
            let schedule = read_schedule(input.as_deref())?;
            let request = &schedule.request;
            println!(
                "{} events, {} mandatory, {} optional, {} min",
                schedule.events.len(),
                request.mandatory_attendees().len(),
                request.optional_attendees().len(),
                request.duration_minutes()
            );
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "meeting_engine=debug,find_meeting=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn read_schedule(path: Option<&str>) -> Result<Schedule> {
    let json = read_input(path)?;
    Schedule::from_json(&json).context("Failed to parse schedule")
}

fn render_json(resolution: &Resolution, explain: bool) -> Result<String> {
    let json = if explain {
        serde_json::to_string_pretty(resolution)
    } else {
        serde_json::to_string_pretty(&resolution.slots)
    };
    json.context("Failed to serialize free ranges")
}

fn render_text(resolution: &Resolution, explain: bool) -> String {
    let mut lines = Vec::with_capacity(resolution.slots.len() + 1);
    if explain {
        lines.push(match resolution.pass {
            Pass::Inclusive => "# all attendees considered".to_string(),
            Pass::MandatoryOnly => "# optional attendees dropped".to_string(),
        });
    }
    if resolution.slots.is_empty() {
        lines.push("no available time".to_string());
    }
    for slot in &resolution.slots {
        lines.push(format!("{} {} min", slot, slot.duration()));
    }
    lines.join("\n")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
