use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use sparklines::commands;
use sparklines::config;
use sparklines::season::{DemoSeasonSource, FileSeasonSource, SeasonSource};
use sparklines::season_query;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "sparklines")]
#[command(about = "MLB division sparklines", long_about = "MLB division sparklines\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Directory holding <year>.json season files (overrides the config file)
    #[arg(short = 'D', long, global = true)]
    data_dir: Option<PathBuf>,

    /// Use generated seasons instead of season files
    #[arg(long, global = true)]
    demo: bool,

    /// Season year
    #[arg(short, long, global = true, conflicts_with = "query")]
    season: Option<i32>,

    /// Navigation query to read the season from, e.g. "?year=1998"
    #[arg(short, long, global = true)]
    query: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the season's charts to an SVG page
    Render {
        /// Container width in pixels
        #[arg(short, long, default_value_t = 800)]
        width: u32,

        /// Division to show enlarged, e.g. "AL East"
        #[arg(short, long)]
        focus: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Display division standings as text tables
    Standings {
        /// Divisions per row
        #[arg(short, long, default_value_t = 2)]
        columns: usize,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("data_dir: {}", cfg.data_dir);
    println!("default_season: {}", cfg.default_season);
    println!("label_gap: {}", cfg.label_gap);
    println!("animation_ms: {}", cfg.animation_ms);
    println!("cell_width_px: {}", cfg.cell_width_px);
    println!("use_unicode: {}", cfg.use_unicode);
    println!();
    println!("[division_priority]");
    let mut priorities: Vec<_> = cfg.division_priority.iter().collect();
    priorities.sort_by_key(|(_, rank)| **rank);
    for (key, rank) in priorities {
        println!("\"{}\" = {}", key, rank);
    }
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("unfocused_selection_fg: {:?}{}",
        cfg.theme.unfocused_selection_fg(),
        if cfg.theme.unfocused_selection_fg.is_none() { " (auto: 50% darker)" } else { "" }
    );
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Season from `--season`, then `--query`, then the config file
fn resolve_season(cli: &Cli, config: &config::Config) -> i32 {
    match (&cli.season, &cli.query) {
        (Some(season), _) => *season,
        (None, Some(query)) => season_query::parse_season(query),
        (None, None) => config.default_season,
    }
}

fn create_source(cli: &Cli, config: &config::Config) -> Arc<dyn SeasonSource> {
    if cli.demo {
        tracing::info!("Using generated demo seasons");
        return Arc::new(DemoSeasonSource);
    }
    let dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data_dir));
    tracing::info!("Reading seasons from {}", dir.display());
    Arc::new(FileSeasonSource::new(dir))
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    source: &dyn SeasonSource,
    year: i32,
    command: Commands,
    config: &config::Config,
) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Render { width, focus, output } => {
            commands::render::run(source, year, width, focus, output, config).await
        }
        Commands::Standings { columns } => {
            commands::standings::run(source, year, columns, config).await
        }
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let year = resolve_season(&cli, &config);
    let source = create_source(&cli, &config);

    let Some(command) = cli.command else {
        // If no subcommand, run TUI
        if let Err(e) = sparklines::tui::run(source, year, config).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    // Handle Config command separately (doesn't need a season)
    if let Commands::Config = command {
        handle_config_command();
        return;
    }

    if let Err(e) = execute_command(source.as_ref(), year, command, &config).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
