//! workclock library root.
//! Exposes the CLI parser, the high-level run() function, and internal
//! modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod utils;

use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use utils::clock::SystemClock;

pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    match cli.command.unwrap_or(Commands::Serve { bind: None }) {
        Commands::Init => init(&cfg),
        Commands::Serve { bind } => {
            if let Some(b) = bind {
                cfg.bind = b;
            }
            serve(&cfg).await
        }
    }
}

fn init(cfg: &Config) -> AppResult<()> {
    cfg.save()?;
    let conn = open_initialized(&cfg.database)?;
    drop(conn);
    println!("Config file: {:?}", Config::config_file());
    println!("Database:    {}", cfg.database);
    Ok(())
}

fn open_initialized(database: &str) -> AppResult<rusqlite::Connection> {
    let path = Path::new(database);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let conn = db::open(path)?;
    db::init_db(&conn)?;
    Ok(conn)
}

async fn serve(cfg: &Config) -> AppResult<()> {
    // create schema and seed defaults up front so every request can assume
    // a usable database
    let conn = open_initialized(&cfg.database)?;
    drop(conn);

    let state = api::AppState::new(PathBuf::from(&cfg.database), Arc::new(SystemClock));
    let router = api::build_router(state);

    let addr: SocketAddr = cfg
        .bind
        .parse()
        .map_err(|_| AppError::Config(format!("invalid bind address '{}'", cfg.bind)))?;
    tracing::info!("listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
