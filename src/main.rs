use std::{env, net::SocketAddr};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};
use weight_tracker::{AppState, SeriesStore, load_goal, load_series, resolve_data_dir, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_dir = resolve_data_dir();
    tokio::fs::create_dir_all(&data_dir).await?;

    let series = load_series(&data_dir).await;
    let goal = load_goal(&data_dir).await;
    info!(
        "loaded {} samples from {}",
        series.samples.len(),
        data_dir.display()
    );

    let state = AppState::new(data_dir, SeriesStore::new(series, goal));
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
