use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::dispatch::{NotificationMessage, ProviderError, PushProvider};

use super::models::{
    FcmApiResponse, FcmMessage, FcmMessageContent, FcmNotification, GoogleTokenResponse,
    JwtClaims, ServiceAccountKey, TokenCache,
};
use super::FcmError;

const OAUTH_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";
const OAUTH_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Firebase Cloud Messaging client.
///
/// Constructed once at startup from the service-account key and shared
/// read-only across request handlers. The token cache is the only interior
/// state and is mutex-guarded for concurrent use.
pub struct FcmClient {
    credentials: ServiceAccountKey,
    token_cache: Mutex<Option<TokenCache>>,
    http_client: reqwest::Client,
}

impl FcmClient {
    pub fn new(credentials: ServiceAccountKey) -> Self {
        Self {
            credentials,
            token_cache: Mutex::new(None),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.credentials.project_id
    }

    /// Perform one FCM v1 send round-trip and return the provider-assigned
    /// message name.
    async fn send_message(&self, content: FcmMessageContent) -> Result<String, FcmError> {
        let access_token = self.get_access_token().await?;

        let url = format!(
            "https://fcm.googleapis.com/v1/projects/{}/messages:send",
            self.credentials.project_id
        );

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(access_token)
            .json(&FcmMessage { message: content })
            .send()
            .await
            .map_err(|e| FcmError::SendRequest(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FcmError::Api(status.to_string(), error_text));
        }

        let fcm_response: FcmApiResponse = response
            .json()
            .await
            .map_err(|e| FcmError::ResponseParse(e.to_string()))?;

        fcm_response
            .name
            .ok_or_else(|| FcmError::ResponseParse("missing message name".to_string()))
    }

    fn content(message: &NotificationMessage) -> FcmMessageContent {
        FcmMessageContent {
            token: None,
            topic: None,
            condition: None,
            notification: FcmNotification {
                title: message.title.clone(),
                body: message.body.clone(),
            },
        }
    }

    /// Get an OAuth2 access token, minting a new one when the cached token
    /// is expired or about to expire.
    async fn get_access_token(&self) -> Result<String, FcmError> {
        {
            let cache = self.token_cache.lock().expect("Token cache lock poisoned");
            if let Some(cached) = cache.as_ref() {
                if cached.is_fresh(Utc::now().timestamp()) {
                    return Ok(cached.access_token.clone());
                }
            }
        }

        // Sign a JWT assertion with the service-account key and exchange it
        let now = Utc::now();
        let claims = JwtClaims {
            iss: self.credentials.client_email.clone(),
            scope: OAUTH_SCOPE.to_string(),
            aud: self.credentials.token_uri.clone(),
            exp: (now + Duration::hours(1)).timestamp(),
            iat: now.timestamp(),
        };

        let encoding_key = EncodingKey::from_rsa_pem(self.credentials.private_key.as_bytes())
            .map_err(|e| FcmError::KeyParse(e.to_string()))?;
        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)
            .map_err(|e| FcmError::JwtEncode(e.to_string()))?;

        let params = [("grant_type", OAUTH_GRANT_TYPE), ("assertion", &assertion)];
        let response = self
            .http_client
            .post(&self.credentials.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| FcmError::Token(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FcmError::TokenRequestFailed(response.status().to_string()));
        }

        let token_response: GoogleTokenResponse = response
            .json()
            .await
            .map_err(|e| FcmError::ResponseParse(e.to_string()))?;

        let expires_at = Utc::now().timestamp() + token_response.expires_in;
        {
            let mut cache = self.token_cache.lock().expect("Token cache lock poisoned");
            *cache = Some(TokenCache {
                access_token: token_response.access_token.clone(),
                expires_at,
            });
        }

        Ok(token_response.access_token)
    }
}

#[async_trait]
impl PushProvider for FcmClient {
    async fn send_to_condition(
        &self,
        condition: &str,
        message: &NotificationMessage,
    ) -> Result<String, ProviderError> {
        let content = FcmMessageContent {
            condition: Some(condition.to_string()),
            ..Self::content(message)
        };
        self.send_message(content).await.map_err(ProviderError::from)
    }

    async fn send_to_topic(
        &self,
        topic: &str,
        message: &NotificationMessage,
    ) -> Result<String, ProviderError> {
        let content = FcmMessageContent {
            topic: Some(topic.to_string()),
            ..Self::content(message)
        };
        self.send_message(content).await.map_err(ProviderError::from)
    }

    async fn send_to_token(
        &self,
        token: &str,
        message: &NotificationMessage,
    ) -> Result<String, ProviderError> {
        let content = FcmMessageContent {
            token: Some(token.to_string()),
            ..Self::content(message)
        };
        self.send_message(content).await.map_err(ProviderError::from)
    }
}
