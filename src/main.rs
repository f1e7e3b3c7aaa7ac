use movie_picker::{
    api::{create_router, AppState},
    config::Config,
};

const DEFAULT_LOG_FILTER: &str = "movie_picker=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Respect RUST_LOG if set
    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;

    // Initialize application state
    let state = AppState::from_config(&config)?;

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
