mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(name = "rhtmx-crumbs")]
#[command(version, about = "Preview RHTMX breadcrumb trails for a route table", long_about = None)]
struct Cli {
    /// Config file with [breadcrumbs] options and [[routes]]
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the breadcrumb trail for an active path
    Derive {
        /// Absolute path of the active page, e.g. /docs/getting-started
        path: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Normalize the path first (trailing/double slashes, backslashes)
        #[arg(short, long)]
        normalize: bool,
    },

    /// List configured routes in match order
    Routes,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// One line per entry
    Text,
    /// JSON array of { label, ariaLabel, to, current }
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Derive {
            path,
            format,
            normalize,
        } => {
            commands::derive::execute(&config, &path, format, normalize)?;
        }
        Commands::Routes => {
            commands::routes::execute(&config)?;
        }
    }

    Ok(())
}
