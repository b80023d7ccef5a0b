// Infrastructure layer (shared components)
pub mod config;
pub mod error;

// Domain layer (business logic)
pub mod dispatch;
pub mod fcm;
pub mod subscription;

// Application layer
pub mod api;
pub mod server;
