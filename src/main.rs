use std::sync::Arc;

use todo_service::store::DynamoStore;
use todo_service::{app, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let table_name = std::env::var("TABLE_NAME").unwrap_or_else(|_| "todos".to_string());
    let store = DynamoStore::new(&table_name).await;
    tracing::info!(table = %table_name, "connected to document store");

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    tracing::info!(%addr, "server starting");

    let state = AppState {
        store: Arc::new(store),
    };
    axum::serve(listener, app(state))
        .await
        .expect("server error");
}
