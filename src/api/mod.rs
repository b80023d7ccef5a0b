//! HTTP façade: push-notification trigger endpoints.

mod handlers;
mod health;
mod models;
mod routes;

pub use handlers::{push_to_condition, push_to_token, push_to_topic};
pub use models::{MessageRequest, MessageResponse};
pub use routes::api_routes;
