use astro_mock::{MockState, router};
use tokio::net::TcpListener;
use tracing::info;

const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "astro_mock=info,tower_http=info".into()),
        )
        .with_target(false)
        .init();

    let port = std::env::var("MOCK_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let state = MockState::seeded().into_shared();
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!(addr = %listener.local_addr()?, "astro-mock ready");

    axum::serve(listener, router(state)).await?;
    Ok(())
}
