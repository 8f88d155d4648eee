#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let catalog = config.load_catalog().expect("catalog load failed");
    tracing::info!(
        items = catalog.len(),
        source = config.catalog_source(),
        "catalog loaded"
    );

    let state = state::AppState::new(catalog);
    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "storefront listening");
    axum::serve(listener, app).await.expect("server failed");
}
