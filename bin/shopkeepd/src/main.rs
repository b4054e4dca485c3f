//! `shopkeepd` — the catalog admin server binary.
//!
//! Usage:
//!   shopkeepd [-c <context-name-or-path>] [--listen <addr>] [--db <path>]
//!
//! The context name resolves to `/etc/shopkeep/<name>.toml`. Without a
//! config file the server runs with defaults (SQLite file in the
//! current directory).

mod config;
mod routes;

use std::path::PathBuf;

use clap::Parser;
use shopkeep_core::{Module, ServiceConfig};
use tracing::info;

use catalog::CatalogModule;
use catalog::service::CatalogService;
use config::ServerConfig;

/// Catalog admin server.
#[derive(Parser, Debug)]
#[command(name = "shopkeepd", about = "Category/product catalog admin server")]
struct Cli {
    /// Context name or path to a TOML config file.
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Listen address (overrides the config file; default 0.0.0.0:8080).
    #[arg(long = "listen")]
    listen: Option<String>,

    /// SQLite database path (overrides the config file).
    #[arg(long = "db")]
    db: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load server configuration, if any.
    let server_config = match &cli.config {
        Some(name) => {
            let path = ServerConfig::resolve_path(name);
            info!("loading configuration from {}", path.display());
            ServerConfig::load(&path)?
        }
        None => ServerConfig::default(),
    };

    let service_config = ServiceConfig {
        data_dir: server_config.storage.data_dir.as_ref().map(PathBuf::from),
        sqlite_path: cli.db.clone(),
        listen: cli
            .listen
            .or(server_config.listen)
            .unwrap_or_else(|| ServiceConfig::default().listen),
    };

    // Initialize storage.
    let db_path = service_config.resolve_sqlite_path();
    if let Some(dir) = db_path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    let sql = shopkeep_sql::SqliteStore::open(&db_path)
        .map_err(|e| anyhow::anyhow!("failed to open SQL store: {e}"))?;
    info!("SQL store open at {}", db_path.display());

    // Initialize modules.
    let catalog_module = CatalogModule::new(CatalogService::new(Box::new(sql))?);
    info!("catalog module initialized");

    // Build router and serve.
    let app = routes::build_router(vec![Box::new(catalog_module)]);

    let listener = tokio::net::TcpListener::bind(&service_config.listen).await?;
    info!("shopkeepd listening on {}", service_config.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
