//! jsonflow CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "jsonflow")]
#[command(about = "Turn JSON documents into laid-out node graphs and search them by path", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to .jsonflow.toml in the current directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the node/edge graph for a document and print it as JSON
    Build {
        /// Input file; reads stdin when omitted or "-"
        file: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Resolve a path query such as `user.name` or `items[0].price`
    Find {
        /// Path query
        query: String,

        /// Input file; reads stdin when omitted or "-"
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Print the sample document
    Sample,
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so piped JSON output stays clean.
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "jsonflow={log_level},jsonflow_core={log_level},jsonflow_server={log_level}"
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Build { file, pretty } => commands::build(file.as_deref(), pretty, &config),
        Commands::Find { query, file } => commands::find(file.as_deref(), &query, &config),
        Commands::Sample => {
            println!("{}", jsonflow_core::SAMPLE_JSON);
            Ok(())
        }
        Commands::Serve { port, host } => commands::serve(config, host, port).await,
        Commands::Version => {
            println!("jsonflow v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
