use mock_server::Store;
use tokio::net::TcpListener;
use tracing::info;

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    setup_tracing();
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;

    let mut store = Store::default();
    if std::env::var("SEED_DEMO").map(|v| v == "1").unwrap_or(false) {
        store.seed_demo();
        info!("seeded demo catalog and orders");
    }

    info!("listening on {addr}");
    axum::serve(listener, mock_server::app_with(store)).await
}
