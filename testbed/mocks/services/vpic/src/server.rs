use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::fixtures::VpicFixture;
use crate::handlers::{get_makes_for_vehicle_type, get_models_for_make_id_year, health_check};

/// Shared handler state: the fixture plus a log of every API path requested.
pub struct MockState {
    pub fixture: VpicFixture,
    requests: Mutex<Vec<String>>,
}

impl MockState {
    pub fn record(&self, path: String) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(path);
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

pub struct MockServer {
    state: Arc<MockState>,
}

/// A server bound to an ephemeral port, running in the background.
pub struct RunningMockServer {
    pub addr: SocketAddr,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl RunningMockServer {
    /// Base URL to hand to a client, equivalent to vPIC's `/api/vehicles`.
    pub fn base_url(&self) -> String {
        format!("http://{}/api/vehicles", self.addr)
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.requests()
    }

    /// Number of requests received for one exact path.
    pub fn request_count(&self, path: &str) -> usize {
        self.state.requests().iter().filter(|p| *p == path).count()
    }
}

impl Drop for RunningMockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl MockServer {
    pub async fn new() -> anyhow::Result<Self> {
        Self::with_fixture(VpicFixture::create_test_fixture()).await
    }

    pub async fn with_fixture(fixture: VpicFixture) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            fixture,
            requests: Mutex::new(Vec::new()),
        });
        Ok(Self { state })
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(health_check))
            .route(
                "/api/vehicles/GetMakesForVehicleType/{vehicle_type}",
                get(get_makes_for_vehicle_type),
            )
            .route(
                "/api/vehicles/GetModelsForMakeIdYear/makeId/{make_id}/modelyear/{year}",
                get(get_models_for_make_id_year),
            )
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    pub async fn serve(self, addr: &str) -> anyhow::Result<()> {
        let addr: SocketAddr = addr.parse()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("vPIC mock server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .await
            .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;

        Ok(())
    }

    /// Bind to `127.0.0.1:0` and serve from a background task.
    pub async fn start(self) -> anyhow::Result<RunningMockServer> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let app = self.router();

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("vPIC mock server error: {}", e);
            }
        });

        Ok(RunningMockServer {
            addr,
            state: self.state,
            handle,
        })
    }
}
