use std::sync::Arc;

use crate::config::Settings;
use crate::dispatch::{MessageDispatcher, PushProvider};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub dispatcher: Arc<MessageDispatcher>,
}

impl AppState {
    /// The provider handle is constructed once during startup and treated
    /// as immutable afterwards; handlers share it through the dispatcher.
    pub fn new(settings: Settings, provider: Arc<dyn PushProvider>) -> Self {
        let dispatcher = Arc::new(MessageDispatcher::new(provider));

        Self {
            settings: Arc::new(settings),
            dispatcher,
        }
    }
}
