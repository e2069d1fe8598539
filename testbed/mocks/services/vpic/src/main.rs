use std::env;
use std::fs;
use vpic_mock::{MockServer, VpicFixture};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let fixtures_path = env::var("FIXTURES_PATH").unwrap_or_else(|_| "/app/fixtures".to_string());
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8089".to_string());

    let server = if let Ok(fixture_file) = fs::read_to_string(format!("{}/vpic-fixture.yaml", fixtures_path)) {
        tracing::info!("Loading fixtures from {}/vpic-fixture.yaml", fixtures_path);
        let fixture = VpicFixture::from_yaml(&fixture_file)?;
        MockServer::with_fixture(fixture).await?
    } else {
        tracing::info!("No fixture file found, using default test fixture");
        MockServer::new().await?
    };

    tracing::info!("Starting vPIC Mock Server on HTTP {}", bind_addr);
    server.serve(&bind_addr).await?;

    Ok(())
}
