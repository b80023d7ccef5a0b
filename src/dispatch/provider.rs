use async_trait::async_trait;

use super::{NotificationMessage, ProviderError};

/// Seam between the dispatcher and the external push-delivery provider.
///
/// Each operation performs one synchronous send round-trip and returns the
/// provider-assigned message identifier, or a `ProviderError` value. No
/// implementation may panic or otherwise let a provider failure escape as
/// anything but the error variant.
#[async_trait]
pub trait PushProvider: Send + Sync {
    /// Send to all devices whose topic subscriptions satisfy a boolean
    /// condition expression.
    async fn send_to_condition(
        &self,
        condition: &str,
        message: &NotificationMessage,
    ) -> Result<String, ProviderError>;

    /// Send to all devices subscribed to a named topic.
    async fn send_to_topic(
        &self,
        topic: &str,
        message: &NotificationMessage,
    ) -> Result<String, ProviderError>;

    /// Send to a single device identified by its registration token.
    async fn send_to_token(
        &self,
        token: &str,
        message: &NotificationMessage,
    ) -> Result<String, ProviderError>;
}
