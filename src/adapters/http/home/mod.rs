//! HTTP adapter for the server-rendered listing page.

mod handlers;
mod view;

use axum::{routing::get, Router};

use crate::adapters::http::middleware::method_not_allowed;

pub use handlers::{index, HomeState};
pub use view::{escape_html, render_user_list};

/// Creates the router for `GET /`.
pub fn home_routes(state: HomeState) -> Router {
    Router::new()
        .route("/", get(index).fallback(method_not_allowed))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::domain::user::sample_profiles;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn home_serves_html_listing() {
        let repo = Arc::new(InMemoryUserRepository::with_profiles(sample_profiles().unwrap()));
        let app = home_routes(HomeState::new(repo));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Robert Johnson"));
    }
}
