mod settings;

pub use settings::{FcmConfig, ServerConfig, Settings};
