use tracing_subscriber::EnvFilter;

use patient_intake::{api, config, db};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let cfg = config::Config::from_env();

    // Create the schema up front so the first request never races it.
    if let Err(e) = db::open_database(&cfg.db_path) {
        tracing::error!("Failed to initialize database at {:?}: {e}", cfg.db_path);
        std::process::exit(1);
    }
    tracing::info!(path = ?cfg.db_path, "Database ready");

    let mut server = match api::start_server(cfg.db_path, cfg.port).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    tracing::info!("Listening on http://0.0.0.0:{}", server.port());

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    server.shutdown();
    server.wait_until_stopped().await;
}
