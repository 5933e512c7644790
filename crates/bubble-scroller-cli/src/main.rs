use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bubble_scroller_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "bubble-scroller")]
#[command(author, version, about = "A bulging alphabetical fast-scroll index for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Section labels, comma or space separated (shorthand for `run --sections`)
    #[arg(short = 's', long = "sections", global = true)]
    sections: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Place the bumper and print the resulting geometry
    Inspect {
        /// Bumper centre x
        #[arg(long, allow_hyphen_values = true)]
        x: f32,
        /// Bumper centre y
        #[arg(long, allow_hyphen_values = true)]
        y: f32,
        /// Width of the laid out area
        #[arg(long, default_value_t = 1000.0)]
        width: f32,
        /// Height of the laid out area
        #[arg(long, default_value_t = 1000.0)]
        height: f32,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration if none exists
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration file path
    Path,
}

fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if to_file {
        // The TUI owns the terminal, so logs go to a file under the data dir.
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    let tui = matches!(cli.command, None | Some(Commands::Run));
    init_logging(&config, tui)?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config, cli.sections.as_deref()),
        Some(Commands::Inspect {
            x,
            y,
            width,
            height,
            json,
        }) => commands::inspect::run(
            &config,
            commands::inspect::InspectArgs {
                x,
                y,
                width,
                height,
                sections: cli.sections.as_deref(),
                json,
            },
        ),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init { force } => commands::config::init(force),
            ConfigAction::Path => commands::config::path(),
        },
    }
}
