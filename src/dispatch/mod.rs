//! Recipient resolution and message dispatch.
//!
//! Translates a `(RecipientSelector, NotificationMessage)` pair into exactly
//! one call against the push provider and normalizes its outcome into a
//! `DispatchResult`. Provider failures are values, never escaping errors.

mod dispatcher;
mod provider;
mod types;

pub use dispatcher::MessageDispatcher;
pub use provider::PushProvider;
pub use types::{DispatchResult, NotificationMessage, ProviderError, RecipientSelector};
