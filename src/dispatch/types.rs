use thiserror::Error;

/// Notification content supplied by the caller. Forwarded to the provider
/// verbatim; the dispatcher performs no transformation of title or body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub title: String,
    pub body: String,
}

impl NotificationMessage {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Recipient addressing for a single dispatch. Exactly one selector
/// accompanies each request; selectors are never combined.
///
/// The inner value is provider-defined syntax (a boolean topic expression,
/// a topic name, or a registration token) and is passed through unparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipientSelector {
    /// Boolean expression over topic membership,
    /// e.g. `'Technology' in topics || 'Automotive' in topics`
    TopicCondition(String),
    /// Single named topic
    Topic(String),
    /// Single device registration token
    DeviceToken(String),
}

/// Opaque provider failure. Carries a human-readable message only; no
/// provider error categories are distinguished at this level.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ProviderError {
    message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of a single dispatch attempt. A failed attempt is terminal:
/// no retry state is retained.
pub type DispatchResult = Result<String, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::new("invalid-registration-token");
        assert_eq!(err.to_string(), "invalid-registration-token");
        assert_eq!(err.message(), "invalid-registration-token");
    }
}
