use axum::{routing::get, Router};

use crate::AppState;

pub const HEALTH_BANNER: &str = "¡API de FincaPiza funcionando!";

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub async fn health() -> &'static str {
    HEALTH_BANNER
}

#[cfg(test)]
mod tests {
    use super::super::test_support::TestApp;
    use super::HEALTH_BANNER;
    use axum::http::{Method, StatusCode};

    #[tokio::test]
    async fn test_health_banner() {
        let app = TestApp::new().await;

        let (status, body) = app.send(Method::GET, "/api/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(std::str::from_utf8(&body).unwrap(), HEALTH_BANNER);
    }
}
