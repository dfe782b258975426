use staffly_api_mock::MockState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("staffly_api_mock=debug,tower_http=info")),
        )
        .init();

    let addr = std::env::var("STAFFLY_MOCK_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let token = std::env::var("STAFFLY_TOKEN").unwrap_or_else(|_| "dev-token".to_string());

    let state = MockState::new(token);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "staffly mock API listening");

    staffly_api_mock::serve(listener, state).await?;
    Ok(())
}
