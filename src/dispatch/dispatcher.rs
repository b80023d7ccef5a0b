use std::sync::Arc;

use super::{DispatchResult, NotificationMessage, PushProvider, RecipientSelector};

/// Routes a notification to the push provider according to its recipient
/// selector.
///
/// Holds a shared, read-only provider handle constructed once at startup.
/// Each `dispatch` call performs exactly one outbound provider call, mutates
/// no local state, and never retries.
pub struct MessageDispatcher {
    provider: Arc<dyn PushProvider>,
}

impl MessageDispatcher {
    pub fn new(provider: Arc<dyn PushProvider>) -> Self {
        Self { provider }
    }

    /// Dispatch one notification to the recipients named by `selector`.
    ///
    /// The selector's inner value is provider-defined syntax and is passed
    /// through verbatim; no disambiguation is performed here since routing
    /// guarantees a single selector per request.
    pub async fn dispatch(
        &self,
        selector: &RecipientSelector,
        message: &NotificationMessage,
    ) -> DispatchResult {
        let result = match selector {
            RecipientSelector::TopicCondition(condition) => {
                self.provider.send_to_condition(condition, message).await
            }
            RecipientSelector::Topic(topic) => self.provider.send_to_topic(topic, message).await,
            RecipientSelector::DeviceToken(token) => {
                self.provider.send_to_token(token, message).await
            }
        };

        match &result {
            Ok(message_id) => {
                tracing::info!(selector = ?selector, message_id = %message_id, "Message dispatched");
            }
            Err(e) => {
                tracing::warn!(selector = ?selector, error = %e, "Provider send failed");
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::dispatch::ProviderError;

    /// Records every provider call and replays a configured outcome.
    struct RecordingProvider {
        calls: Mutex<Vec<(String, String, NotificationMessage)>>,
        outcome: Result<String, ProviderError>,
    }

    impl RecordingProvider {
        fn succeeding(message_id: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                outcome: Ok(message_id.to_string()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                outcome: Err(ProviderError::new(message)),
            }
        }

        fn record(&self, kind: &str, target: &str, message: &NotificationMessage) {
            self.calls.lock().unwrap().push((
                kind.to_string(),
                target.to_string(),
                message.clone(),
            ));
        }

        fn calls(&self) -> Vec<(String, String, NotificationMessage)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PushProvider for RecordingProvider {
        async fn send_to_condition(
            &self,
            condition: &str,
            message: &NotificationMessage,
        ) -> Result<String, ProviderError> {
            self.record("condition", condition, message);
            self.outcome.clone()
        }

        async fn send_to_topic(
            &self,
            topic: &str,
            message: &NotificationMessage,
        ) -> Result<String, ProviderError> {
            self.record("topic", topic, message);
            self.outcome.clone()
        }

        async fn send_to_token(
            &self,
            token: &str,
            message: &NotificationMessage,
        ) -> Result<String, ProviderError> {
            self.record("token", token, message);
            self.outcome.clone()
        }
    }

    #[tokio::test]
    async fn test_dispatch_returns_provider_message_id() {
        let provider = Arc::new(RecordingProvider::succeeding("msg-123"));
        let dispatcher = MessageDispatcher::new(provider.clone());

        let message = NotificationMessage::new("Earnings", "Q3 results out");
        let result = dispatcher
            .dispatch(&RecipientSelector::Topic("Technology".to_string()), &message)
            .await;

        assert_eq!(result, Ok("msg-123".to_string()));
    }

    #[tokio::test]
    async fn test_dispatch_forwards_message_unchanged() {
        let provider = Arc::new(RecordingProvider::succeeding("msg-1"));
        let dispatcher = MessageDispatcher::new(provider.clone());

        let message = NotificationMessage::new("Earnings", "Q3 results out");
        dispatcher
            .dispatch(
                &RecipientSelector::DeviceToken("abc123".to_string()),
                &message,
            )
            .await
            .unwrap();

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "token");
        assert_eq!(calls[0].1, "abc123");
        assert_eq!(calls[0].2, message);
    }

    #[tokio::test]
    async fn test_dispatch_is_selector_exclusive() {
        let provider = Arc::new(RecordingProvider::succeeding("msg-1"));
        let dispatcher = MessageDispatcher::new(provider.clone());
        let message = NotificationMessage::new("t", "b");

        dispatcher
            .dispatch(
                &RecipientSelector::TopicCondition("'Technology' in topics".to_string()),
                &message,
            )
            .await
            .unwrap();

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "condition");
        assert_eq!(calls[0].1, "'Technology' in topics");
    }

    #[tokio::test]
    async fn test_dispatch_converts_provider_failure_to_result() {
        let provider = Arc::new(RecordingProvider::failing("invalid-registration-token"));
        let dispatcher = MessageDispatcher::new(provider);

        let result = dispatcher
            .dispatch(
                &RecipientSelector::DeviceToken("bad-token".to_string()),
                &NotificationMessage::new("t", "b"),
            )
            .await;

        assert_eq!(
            result.unwrap_err().message(),
            "invalid-registration-token"
        );
    }

    #[tokio::test]
    async fn test_dispatch_is_not_deduplicated() {
        let provider = Arc::new(RecordingProvider::succeeding("msg-1"));
        let dispatcher = MessageDispatcher::new(provider.clone());

        let selector = RecipientSelector::Topic("Energy".to_string());
        let message = NotificationMessage::new("t", "b");

        dispatcher.dispatch(&selector, &message).await.unwrap();
        dispatcher.dispatch(&selector, &message).await.unwrap();

        // Two identical requests mean two independent provider sends.
        assert_eq!(provider.calls().len(), 2);
    }
}
