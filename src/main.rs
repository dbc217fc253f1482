mod api;
mod cli;
mod command;
mod error;
mod model;
mod service;
mod storage;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> std::io::Result<()> {
    // 解析命令行参数；无子命令默认进入交互 shell
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Shell);

    match command {
        Commands::Shell => {
            cli::shell::execute()?;
        }
        Commands::Serve { port, host, db } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .init();

            let db_path = match db {
                Some(path) => path,
                None => storage::default_db_path()?,
            };

            let store = match storage::sqlite::SqliteStore::open(&db_path) {
                Ok(store) => store,
                Err(e) => {
                    eprintln!("Failed to open database {}: {}", db_path.display(), e);
                    std::process::exit(1);
                }
            };
            let state = api::state::ApiState::new(store);

            tokio::runtime::Runtime::new()
                .expect("Failed to create tokio runtime")
                .block_on(async {
                    if let Err(e) = api::start_server(&host, port, state).await {
                        eprintln!("API server error: {}", e);
                        std::process::exit(1);
                    }
                });
        }
    }

    Ok(())
}
