// src/main.rs

use recipeshare_backend::config::Config;
use recipeshare_backend::routes;
use recipeshare_backend::state::AppState;
use recipeshare_backend::store::Db;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment (.env honored)
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Process-lifetime storage: two seed users and two seed recipes,
    // recreated on every start.
    let db = Db::seeded();
    tracing::info!("In-memory store seeded with demo data");

    let bind_addr = config.bind_addr.clone();
    let state = AppState { db, config };

    // Create the Axum application router
    let app = routes::create_router(state);

    tracing::info!("Listening on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind {}: {}", bind_addr, e));

    // Start the server
    axum::serve(listener, app)
        .await
        .expect("Server exited with an error");
}
