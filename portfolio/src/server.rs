//! HTTP server for the portfolio page.
//!
//! `GET /` renders a full page. The terminal form submits back to `/?q=...`,
//! so each query is one render pass.

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use portfolio_core::Portfolio;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

type AppState = Arc<Portfolio>;

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    /// Terminal query text.
    #[serde(default)]
    q: Option<String>,
}

/// Build the application router.
pub fn router(site: Arc<Portfolio>) -> Router {
    Router::new()
        .route("/", get(page))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(site)
}

/// Run the HTTP server until the process is stopped.
pub async fn serve(site: Portfolio, addr: SocketAddr) -> anyhow::Result<()> {
    let app = router(Arc::new(site));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("portfolio listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn page(State(site): State<AppState>, Query(params): Query<PageParams>) -> Html<String> {
    let query = params.q.as_deref().unwrap_or_default();
    info!(query_len = query.len(), "rendering page");

    let rendered = site.render(Some(query)).await;
    Html(rendered.html)
}

async fn healthz() -> &'static str {
    "ok"
}
