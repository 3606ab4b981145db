mod handlers;
mod routes;
mod state;
pub mod static_assets;

use std::net::IpAddr;

use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use routes::create_router;
pub use state::AppState;

use crate::error::SiteResult;
use crate::page::PageView;

/// Server configuration
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
        }
    }
}

/// Initialize tracing subscriber with env filter
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "landing=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Serve the page with the given configuration
pub async fn run(config: Config, page: &PageView) -> SiteResult<()> {
    let app = create_router(AppState::new(page)).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(hero = %page.hero_src, "serving on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
