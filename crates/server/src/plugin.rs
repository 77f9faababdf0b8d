use axum::{
    extract::{Host, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::errors::ApiError;
use crate::routes::AppState;

/// Token in the OpenAPI document that gets replaced with the caller-observed
/// base address on every request.
pub const HOSTNAME_TOKEN: &str = "PLUGIN_HOSTNAME";

/// Plugin manifest, read from disk per request and served verbatim.
pub async fn plugin_manifest(State(state): State<AppState>) -> Result<Response, ApiError> {
    let body = tokio::fs::read_to_string(&state.assets.manifest).await?;
    Ok(([(header::CONTENT_TYPE, "text/json")], body).into_response())
}

/// OpenAPI document, re-rendered per request so it stays self-referential to
/// whatever address the caller used to reach the service. Never cached: the
/// externally visible address may differ across deployments and proxies.
pub async fn openapi_spec(
    State(state): State<AppState>,
    Host(authority): Host,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    let base = format!("{scheme}://{authority}");
    debug!(%base, "rendering openapi document");
    let text = tokio::fs::read_to_string(&state.assets.openapi).await?;
    Ok((
        [(header::CONTENT_TYPE, "text/yaml")],
        text.replace(HOSTNAME_TOKEN, &base),
    )
        .into_response())
}
