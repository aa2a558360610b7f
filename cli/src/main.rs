//! PortReaper CLI - Inspect and reap processes on network ports
//!
//! A command-line tool for scanning ports, finding and killing the
//! process behind a local port, and watching the listening-port table.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "portreaper")]
#[command(author, version, about = "Inspect and reap processes on network ports")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a host for open TCP ports
    Scan {
        /// Host to scan
        #[arg(default_value = "127.0.0.1")]
        host: String,

        /// Ports/range to scan (e.g. 1-1024 or 80,443)
        #[arg(short, long)]
        ports: Option<String>,
    },

    /// Find who occupies a local port
    Find {
        /// Port number to look up
        port: u16,
    },

    /// Reap the process on a local port
    Kill {
        /// Port number to kill
        port: u16,

        /// Force kill (SIGKILL) instead of graceful termination
        #[arg(short, long)]
        force: bool,
    },

    /// List all listening ports
    #[command(alias = "ls")]
    List {
        /// Filter by port number
        #[arg(short, long)]
        port: Option<u16>,

        /// Filter by process name
        #[arg(short = 'n', long)]
        name: Option<String>,
    },

    /// Watch listening ports until interrupted
    Monitor {
        /// Refresh interval in seconds
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Show current configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { host, ports } => {
            commands::scan::run(&host, ports.as_deref(), cli.json).await?;
        }
        Commands::Find { port } => {
            commands::find::run(port, cli.json).await?;
        }
        Commands::Kill { port, force } => {
            commands::kill::run(port, force, cli.json).await?;
        }
        Commands::List { port, name } => {
            commands::list::run(port, name.as_deref(), cli.json).await?;
        }
        Commands::Monitor { interval } => {
            commands::monitor::run(interval).await?;
        }
        Commands::Config { init } => {
            commands::config::run(init, cli.json).await?;
        }
    }

    Ok(())
}
