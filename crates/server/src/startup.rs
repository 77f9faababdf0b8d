use std::{env, net::SocketAddr, sync::Arc};

use axum::http::HeaderValue;
use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tracing::info;

use crate::routes::{self, AppState};
use service::todo::TodoStore;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

/// CORS: a single allowed origin with credentials, methods/headers mirrored
/// from the request. Wildcards are not valid together with credentials, so
/// mirroring stands in for "all methods/headers for that origin".
pub fn build_cors(cors: &configs::CorsConfig) -> anyhow::Result<CorsLayer> {
    let origin: HeaderValue = cors.allowed_origin.parse()?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Load config from configs crate, falling back to env vars and defaults
fn load_config() -> configs::AppConfig {
    match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(_) => {
            let mut cfg = configs::AppConfig::default();
            if let Ok(host) = env::var("SERVER_HOST") {
                cfg.server.host = host;
            }
            if let Some(port) = env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
                cfg.server.port = port;
            }
            cfg.cors.normalize_from_env();
            cfg
        }
    }
}

fn bind_addr(server: &configs::ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = load_config();
    common::env::ensure_assets(&[&cfg.assets.logo, &cfg.assets.manifest, &cfg.assets.openapi])
        .await;

    // Todo state lives exactly as long as this server task
    let state = AppState {
        todos: TodoStore::new(),
        assets: Arc::new(cfg.assets.clone()),
    };

    let cors = build_cors(&cfg.cors)?;
    let app: Router = routes::build_router(state, cors);

    // Bind and serve
    let addr = bind_addr(&cfg.server)?;
    info!(%addr, origin = %cfg.cors.allowed_origin, "starting todo plugin server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
