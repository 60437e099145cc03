//! `herad` — the HERA server binary.
//!
//! Usage:
//!   herad -c <context-name-or-path> [--listen <addr>]
//!
//! The context name resolves to `/etc/hera/<name>.toml`.
//! If a path with `/` or `.` is given, it's used directly.

mod bootstrap;
mod config;
mod routes;

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use hera_config::Registry;
use hera_core::Module;
use hera_workspace::WorkspaceModule;
use hera_workspace::provider::FileCardProvider;
use hera_workspace::refresh::RefreshConfig;

use config::ServerConfig;

/// HERA server.
#[derive(Parser, Debug)]
#[command(name = "herad", about = "HERA workspace server")]
struct Cli {
    /// Context name or path to config file.
    #[arg(short = 'c', long = "config", required = true)]
    config: String,

    /// Listen address (overrides default 0.0.0.0:8080).
    #[arg(long = "listen", default_value = "0.0.0.0:8080")]
    listen: String,
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

    // Load server configuration.
    let config_path = ServerConfig::resolve_path(&cli.config);
    info!("Loading configuration from {}", config_path.display());
    let server_config = ServerConfig::load(&config_path)?;

    // Verify configuration is valid.
    bootstrap::verify_config(&server_config)?;

    // Validate the built-in catalog before binding anything.
    let registry = Arc::new(Registry::builtin());
    bootstrap::validate_catalog(&registry)?;

    // Initialize storage.
    let data_dir = std::path::PathBuf::from(&server_config.storage.data_dir);
    std::fs::create_dir_all(&data_dir)?;

    let core_config = hera_core::ServiceConfig {
        data_dir: Some(data_dir),
        listen: cli.listen.clone(),
        ..Default::default()
    };

    // Authenticator, injected into every module.
    let authenticator: Arc<dyn hera_core::Authenticator> = match server_config.auth.mode.as_str() {
        "token" => Arc::new(hera_core::StaticToken::new(server_config.auth.token.clone())),
        _ => Arc::new(hera_core::AllowAll),
    };

    // Workspace module: file-backed cards, persisted preferences,
    // background cache refresher.
    let cards = FileCardProvider::open(core_config.resolve_cards_dir())
        .map_err(|e| anyhow::anyhow!("failed to open card storage: {}", e))?;
    let workspace_module = WorkspaceModule::with_config(
        Arc::clone(&registry),
        Box::new(cards),
        core_config.resolve_prefs_dir(),
        authenticator,
        RefreshConfig {
            interval_secs: server_config.refresh.interval_secs,
        },
    )
    .map_err(|e| anyhow::anyhow!("failed to initialize workspace module: {}", e))?;
    info!("Workspace module initialized");

    let module_routes = vec![(workspace_module.name(), workspace_module.routes())];

    // Build router.
    let app = routes::build_router(Arc::clone(&registry), module_routes);

    // Start server.
    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    info!("HERA server listening on {}", cli.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
