use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use gridgen_board::render_board;
use gridgen_font::{column_label, layout_text, Anchor};
use gridgen_footprint::FootprintDefinition;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod error;
mod load;

use crate::error::{CliError, ErrorCode};

#[derive(Parser)]
#[command(name = "gridgen", version, about = "Perfboard footprint geometry", long_about = None)]
struct Cli {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Place every footprint of a board and print the geometry as JSON
    Render {
        /// Board file (YAML, or JSON with a .json extension)
        #[arg(value_name = "BOARD")]
        board: PathBuf,

        /// Extra footprint catalog merged over the built-in one
        #[arg(short, long = "catalog", value_name = "FILE")]
        catalogs: Vec<PathBuf>,

        /// Write JSON here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List catalog footprints
    Catalog {
        /// Only footprints drawn for this grid pitch (mm)
        #[arg(long, value_name = "MM")]
        pitch: Option<f64>,

        #[arg(short, long = "catalog", value_name = "FILE")]
        catalogs: Vec<PathBuf>,
    },

    /// Lay out silkscreen text and print the strokes as JSON
    Text {
        text: String,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        x: f64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        y: f64,

        /// Glyph height (mm)
        #[arg(long, default_value_t = 1.0)]
        height: f64,

        /// left, center or right
        #[arg(long, default_value = "left")]
        anchor: Anchor,
    },

    /// Print the letter label of a zero-based grid column
    ColumnLabel { index: usize },
}

fn init_tracing(debug: bool) {
    let fallback = if debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // stderr is gone if this fails; the exit code still reports it
            let _ = err.print();
            // --help and --version land here too
            return if err.use_stderr() {
                ErrorCode::Usage.exit_code()
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_tracing(cli.debug);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            err.code.exit_code()
        }
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Render {
            board,
            catalogs,
            output,
        } => {
            let config = load::board(&board).map_err(CliError::input)?;
            let catalog = load::catalog(&catalogs).map_err(CliError::input)?;
            let rendered = render_board(&config, &catalog);
            let json = serde_json::to_string_pretty(&rendered).map_err(CliError::processing)?;
            match output {
                Some(path) => std::fs::write(&path, json + "\n")
                    .with_context(|| format!("Could not write {}", path.display()))
                    .map_err(CliError::processing),
                None => print(&json),
            }
        }
        Command::Catalog { pitch, catalogs } => {
            let catalog = load::catalog(&catalogs).map_err(CliError::input)?;
            let defs: Vec<&FootprintDefinition> = match pitch {
                Some(pitch) => catalog.compatible_with(pitch).collect(),
                None => catalog.iter().collect(),
            };
            let listing: Vec<String> = defs
                .into_iter()
                .map(|def| {
                    format!(
                        "{:<24} {:<8} {:>5.2} {:>2}x{:<2} {}",
                        def.id, def.category, def.pitch, def.width_pins, def.height_pins, def.name
                    )
                })
                .collect();
            print(&listing.join("\n"))
        }
        Command::Text {
            text,
            x,
            y,
            height,
            anchor,
        } => {
            if height.is_nan() || height <= 0.0 {
                return Err(CliError::usage(format!("--height must be positive (got {height})")));
            }
            let strokes = layout_text(&text, x, y, height, anchor);
            let json = serde_json::to_string(&strokes).map_err(CliError::processing)?;
            print(&json)
        }
        Command::ColumnLabel { index } => print(&column_label(index)),
    }
}

fn print(text: &str) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}")
        .and_then(|()| stdout.flush())
        .context("Could not write to stdout")
        .map_err(CliError::processing)
}
