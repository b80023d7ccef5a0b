use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;

use super::handlers::{push_to_condition, push_to_token, push_to_topic};
use super::health::health;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health
        .route("/health", get(health))
        // Message trigger endpoints, one per recipient-selector kind
        .nest(
            "/api/v1",
            Router::new()
                // Topic condition (selector in X-Topic-Condition header)
                .route("/messages", post(push_to_condition))
                // Topic (selector in path)
                .route("/topics/{topic}/messages", post(push_to_topic))
                // Registration token (selector in path)
                .route("/tokens/{token}/messages", post(push_to_token)),
        )
}
