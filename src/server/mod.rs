//! Preview server rendering reports on request

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::content::ItemId;
use crate::SiteCounts;

/// Server state
struct ServerState {
    site: SiteCounts,
}

/// Routes of the preview server
pub fn router(site: SiteCounts) -> Router {
    let state = Arc::new(ServerState { site });

    Router::new()
        .route("/posts/:id", get(report_html))
        .route("/api/posts/:id", get(report_json))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the preview server
pub async fn start(site: &SiteCounts, ip: &str, port: u16) -> Result<()> {
    let app = router(site.clone());

    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}/posts/<id>", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Content is re-read from disk for every request
async fn report_html(State(state): State<Arc<ServerState>>, Path(id): Path<ItemId>) -> Response {
    let site = state.site.clone();
    let result = tokio::task::spawn_blocking(move || site.render_report(id, None)).await;

    match result {
        Ok(Ok(html)) => Html(html).into_response(),
        Ok(Err(e)) => internal_error(e),
        Err(e) => internal_error(e.into()),
    }
}

async fn report_json(State(state): State<Arc<ServerState>>, Path(id): Path<ItemId>) -> Response {
    let site = state.site.clone();
    let result = tokio::task::spawn_blocking(move || site.build_report(id)).await;

    match result {
        Ok(Ok(report)) => Json(report).into_response(),
        Ok(Err(e)) => internal_error(e),
        Err(e) => internal_error(e.into()),
    }
}

fn internal_error(e: anyhow::Error) -> Response {
    tracing::error!("Report failed: {:#}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Report unavailable").into_response()
}
