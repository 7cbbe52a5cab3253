//! Preview server.
//!
//! Renders pages on request instead of reading the build output, so any
//! location name typed into the URL gets its page (subject to the
//! `unknown_names` policy), which a static host cannot do. Undeclared paths
//! answer 404 with the not-found page.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse};
use tower_http::trace::TraceLayer;

use crate::render::Site;
use crate::router::Route;

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Router serving every path from the shared, immutable site.
pub fn app(site: Site) -> Router {
    Router::new()
        .fallback(page_handler)
        .with_state(Arc::new(site))
        .layer(TraceLayer::new_for_http())
}

/// Bind `host:port`. `host` may be an IP address or a hostname.
pub async fn bind(host: &str, port: u16) -> Result<tokio::net::TcpListener, ServeError> {
    tokio::net::TcpListener::bind((host, port))
        .await
        .map_err(|source| ServeError::Bind {
            addr: format!("{host}:{port}"),
            source,
        })
}

/// Bind `host:port` and serve until the process is stopped.
pub async fn serve(site: Site, host: &str, port: u16) -> Result<(), ServeError> {
    let listener = bind(host, port).await?;
    let addr = listener.local_addr()?;

    tracing::info!("Serving site at http://{}", addr);
    axum::serve(listener, app(site)).await?;
    Ok(())
}

async fn page_handler(State(site): State<Arc<Site>>, uri: Uri) -> impl IntoResponse {
    let route = site.resolve(uri.path());
    tracing::debug!(path = uri.path(), ?route, "resolved");
    let status = match route {
        Route::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    };
    (status, Html(site.render_page(&route).into_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, UnknownLocation};
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn get(config: SiteConfig, path: &str) -> (StatusCode, String) {
        let response = app(Site::new(config))
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn binds_hostnames() {
        let listener = bind("localhost", 0).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn bind_failure_names_address() {
        let taken = bind("127.0.0.1", 0).await.unwrap();
        let port = taken.local_addr().unwrap().port();
        let err = bind("127.0.0.1", port).await.unwrap_err();
        assert!(matches!(err, ServeError::Bind { .. }));
        assert!(err.to_string().starts_with(&format!("failed to bind to 127.0.0.1:{port}")));
    }

    #[tokio::test]
    async fn home_is_ok() {
        let (status, body) = get(SiteConfig::default(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Ozonioterapia."));
    }

    #[tokio::test]
    async fn undeclared_path_is_404_page() {
        let (status, body) = get(SiteConfig::default(), "/this-does-not-exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Página não encontrada"));
    }

    #[tokio::test]
    async fn encoded_location_renders_decoded_name() {
        let (status, body) = get(
            SiteConfig::default(),
            "/local/bairro/Ah%C3%BA%20(Alto%20da%20Gl%C3%B3ria)",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>Fisioterapia e Ozonioterapia em Ahú (Alto da Glória) | D'Cellyss</title>"));
    }

    #[tokio::test]
    async fn unknown_name_follows_policy() {
        let (status, body) = get(SiteConfig::default(), "/local/cidade/Atl%C3%A2ntida").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("na cidade de Atlântida"));

        let mut strict = SiteConfig::default();
        strict.locations.unknown_names = UnknownLocation::NotFound;
        let (status, _) = get(strict, "/local/cidade/Atl%C3%A2ntida").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn section_paths_and_trailing_slash() {
        let (status, _) = get(SiteConfig::default(), "/contato/").await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = get(SiteConfig::default(), "/local/estado/Parana").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
