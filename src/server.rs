//! Static host for the built site. Serves `DIST_DIR` with an `index.html`
//! fallback so client-side routes deep-link.

use std::path::PathBuf;

use axum::http::{header, HeaderValue};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use thiserror::Error;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u64 = 8080;
const PORT_BOUNDS: (u64, u64) = (1, 65_535);
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_CACHE_SECONDS: u64 = 3_600;
const CACHE_SECONDS_BOUNDS: (u64, u64) = (0, 31_536_000);

#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub cache_seconds: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Out-of-range or unparsable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u64_with_bounds(lookup("PORT"), DEFAULT_PORT, PORT_BOUNDS);
        let cache_seconds = parse_u64_with_bounds(
            lookup("HOST_CACHE_SECONDS"),
            DEFAULT_CACHE_SECONDS,
            CACHE_SECONDS_BOUNDS,
        );
        let dist_dir = parse_non_empty_string(lookup("DIST_DIR")).unwrap_or_else(|| DEFAULT_DIST_DIR.to_string());

        Self {
            port: u16::try_from(port).unwrap_or(8080),
            dist_dir: PathBuf::from(dist_dir),
            cache_seconds,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    fn cache_control(&self) -> HeaderValue {
        let value = match self.cache_seconds {
            0 => "no-cache".to_string(),
            seconds => format!("public, max-age={seconds}"),
        };
        HeaderValue::from_str(&value).unwrap_or_else(|_| HeaderValue::from_static("no-cache"))
    }
}

fn parse_u64_with_bounds(value: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
}

async fn healthz() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        Json(Health {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

pub fn router(config: &HostConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_service = ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_service)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            config.cache_control(),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Installs the `RUST_LOG`-driven subscriber, `info` when unset.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Fails only when a subscriber is already installed.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

pub async fn run() -> Result<(), HostError> {
    init_tracing();
    let config = HostConfig::from_env();
    let address = config.bind_address();

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|source| HostError::Bind {
            address: address.clone(),
            source,
        })?;
    info!(
        port = config.port,
        dist = %config.dist_dir.display(),
        cache_seconds = config.cache_seconds,
        "serving on http://127.0.0.1:{}",
        config.port
    );

    axum::serve(listener, router(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::http::StatusCode;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> HostConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        HostConfig::from_lookup(|name| env.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        assert_eq!(
            HostConfig::default(),
            HostConfig {
                port: 8080,
                dist_dir: PathBuf::from("dist"),
                cache_seconds: 3_600,
            }
        );
    }

    #[test]
    fn out_of_range_values_fall_back() {
        let config = config_from(&[("PORT", "70000"), ("HOST_CACHE_SECONDS", "-1"), ("DIST_DIR", "   ")]);

        assert_eq!(config.port, 8080);
        assert_eq!(config.cache_seconds, 3_600);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
    }

    #[test]
    fn valid_values_are_trimmed_and_kept() {
        let config = config_from(&[("PORT", " 3000 "), ("HOST_CACHE_SECONDS", "0"), ("DIST_DIR", "public")]);

        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.dist_dir, PathBuf::from("public"));
        assert_eq!(config.cache_control(), HeaderValue::from_static("no-cache"));
        assert_eq!(
            config_from(&[]).cache_control(),
            HeaderValue::from_static("public, max-age=3600")
        );
    }

    #[tokio::test]
    async fn healthz_is_never_cached() {
        let response = healthz().await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL),
            Some(&HeaderValue::from_static("no-store"))
        );
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/json"))
        );
    }
}
