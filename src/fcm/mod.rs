//! Firebase Cloud Messaging client (HTTP v1 API).
//!
//! Handles OAuth2 access-token minting from a Google service account,
//! token caching with refresh, and message delivery to a device token,
//! a topic, or a topic-condition expression.

mod client;
mod error;
mod models;

pub use client::FcmClient;
pub use error::FcmError;
pub use models::ServiceAccountKey;
