use serde::{Deserialize, Serialize};

use crate::dispatch::NotificationMessage;

/// Request body shared by all three message routes
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub title: String,
    pub body: String,
}

impl From<MessageRequest> for NotificationMessage {
    fn from(request: MessageRequest) -> Self {
        NotificationMessage::new(request.title, request.body)
    }
}

/// Success response echoing the provider-assigned message identifier
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    #[serde(rename = "messageId")]
    pub message_id: String,
}
