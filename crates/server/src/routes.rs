use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    services::ServeFile,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::{Greeting, Health};
use configs::AssetsConfig;
use service::todo::TodoStore;

use crate::{plugin, todos};

/// Shared handler state: the todo store plus asset locations.
#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<TodoStore>,
    pub assets: Arc<AssetsConfig>,
}

pub async fn hello_world() -> Json<Greeting> {
    Json(Greeting::default())
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: greeting/health, todo API, plugin assets
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    // Public routes
    let public = Router::new()
        .route("/", get(hello_world))
        .route("/health", get(health));

    // Per-user todo routes
    let todo_routes = Router::new().route(
        "/todos/:username",
        get(todos::get_todos)
            .post(todos::add_todo)
            .delete(todos::delete_todo),
    );

    // Plugin discovery artifacts; the logo is a plain static file
    let plugin_routes = Router::new()
        .route_service("/logo.png", ServeFile::new(state.assets.logo.clone()))
        .route("/.well-known/ai-plugin.json", get(plugin::plugin_manifest))
        .route("/openapi.yaml", get(plugin::openapi_spec));

    // Compose
    public
        .merge(todo_routes)
        .merge(plugin_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 请求到达时打点
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
