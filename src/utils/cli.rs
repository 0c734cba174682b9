//! Running the CLI

// Allow exits because in this file we ideally handle all errors with known exit codes
#![allow(clippy::exit)]

use crate::server::app::serve;
use clap::Parser;

/// Sips is a web service for discovering, rating, and sharing
/// reviews of cafes in New York City.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Sips cli subcommands
    #[command(subcommand)]
    subcommands: Subcommands,
}

///
#[derive(Clone, clap::Subcommand)]
enum Subcommands {
    /// Serve the Sips HTTP API
    Serve {
        /// Port on which to serve the API.
        #[arg(short, long, default_value_t = 5000)]
        port: u16,
    },
}

///
fn init_tracing() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Main entrypoint to application
///
/// # Errors
/// Errors if the server cannot bind its port.
pub fn run() -> std::io::Result<()> {
    init_tracing();
    tracing::debug!("Starting application");
    let cli = Cli::parse();

    match cli.subcommands {
        Subcommands::Serve { port } => serve(port),
    }
}
