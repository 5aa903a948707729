//! HTTP surface for the JSON flow core

pub mod error;
pub mod handlers;
pub mod router;

use std::sync::Arc;

use jsonflow_core::{Flow, LayoutConfig};
use tokio::sync::RwLock;
use tracing::info;

/// Bind address for the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// State shared by every request: the most recently built flow.
pub struct ServerState {
    pub flow: RwLock<Flow>,
    pub layout: LayoutConfig,
}

impl ServerState {
    pub fn new(layout: LayoutConfig) -> Self {
        ServerState {
            flow: RwLock::new(Flow::new()),
            layout,
        }
    }
}

pub struct JsonFlowServer {
    state: Arc<ServerState>,
    config: ServerConfig,
}

impl JsonFlowServer {
    pub fn new(config: ServerConfig, layout: LayoutConfig) -> Self {
        JsonFlowServer {
            state: Arc::new(ServerState::new(layout)),
            config,
        }
    }

    pub fn state(&self) -> Arc<ServerState> {
        Arc::clone(&self.state)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(self) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.address()).await?;
        info!("Listening on http://{}", listener.local_addr()?);

        let app = router::create_router(self.state);
        axum::serve(listener, app).await?;
        Ok(())
    }
}
