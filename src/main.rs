use best_practices::reward::PrizeClient;
use best_practices::{load_data, resolve_data_path, router, status, storage, AppState};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_path = resolve_data_path();
    if let Some(parent) = data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let mut data = load_data(&data_path).await;
    if status::seed_if_empty(&mut data) {
        if let Err(err) = storage::persist_data(&data_path, &data).await {
            error!("failed to persist seeded status: {}", err.message);
        }
    }

    let state = AppState::new(data_path, data, PrizeClient::from_env());
    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
