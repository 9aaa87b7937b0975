//! Command-line interface definition for workclock.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "workclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track daily work time against soft/hard targets over a REST API",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and database
    Init,

    /// Run the HTTP server (default)
    Serve {
        /// Bind address, e.g. 127.0.0.1:8420
        #[arg(long)]
        bind: Option<String>,
    },
}
