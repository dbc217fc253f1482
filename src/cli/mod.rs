//! CLI 模块

pub mod shell;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "todos")]
#[command(version)]
#[command(about = "Minimal task tracker: interactive shell + REST API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive shell (in-memory store)
    Shell,
    /// Start the REST API server (SQLite store)
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = crate::api::DEFAULT_PORT)]
        port: u16,
        /// Host to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Database file (defaults to ~/.todos/todos.db)
        #[arg(long)]
        db: Option<PathBuf>,
    },
}
