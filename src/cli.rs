// src/cli.rs — CLI definition (clap derive)

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "frontfusion", about = "AI UI generator backend", version)]
pub struct Cli {
    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server (default command)
    Serve {
        /// Port override (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Create the database and apply pending migrations, then exit
    InitDb,
}
