//! Lumiere server binary

use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lumiere::api::create_catalog_router;
use lumiere::catalog::{builtin_products, Catalog};
use lumiere::config::{AppConfig, CorsSection, LogFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    let catalog = Catalog::new(builtin_products()).context("invalid built-in catalog")?;
    tracing::info!(products = catalog.len(), "Catalog loaded");

    let cors = build_cors(&config.cors)?;

    let router = create_catalog_router(Arc::new(catalog))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, router).await?;

    Ok(())
}

fn build_cors(cors: &CorsSection) -> anyhow::Result<CorsLayer> {
    let allow_origin = match cors.origin_list() {
        None => AllowOrigin::any(),
        Some(origins) => {
            let mut values = Vec::with_capacity(origins.len());
            for origin in &origins {
                let value = HeaderValue::from_str(origin)
                    .with_context(|| format!("invalid CORS origin '{}'", origin))?;
                values.push(value);
            }
            AllowOrigin::list(values)
        }
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("lumiere=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }

    Ok(())
}
