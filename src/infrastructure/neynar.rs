use crate::domain::frame::{Interactor, Verification};
use crate::domain::ports::FrameVerifier;
use crate::error::VerifyError;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

pub const DEFAULT_NEYNAR_URL: &str = "https://api.neynar.com";

const VALIDATE_PATH: &str = "/v2/farcaster/frame/validate";

/// Validates frame messages with Neynar's hosted hub API.
#[derive(Clone)]
pub struct NeynarVerifier {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NeynarVerifier {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn validate_url(&self) -> String {
        format!("{}{}", self.base_url, VALIDATE_PATH)
    }
}

#[derive(Debug, Deserialize)]
struct ValidateResponse {
    #[serde(default)]
    valid: bool,
    #[serde(default)]
    action: Option<ValidateAction>,
}

#[derive(Debug, Deserialize)]
struct ValidateAction {
    #[serde(default)]
    interactor: Option<Interactor>,
}

impl From<ValidateResponse> for Verification {
    fn from(response: ValidateResponse) -> Self {
        Verification {
            valid: response.valid,
            interactor: response.action.and_then(|action| action.interactor),
        }
    }
}

#[async_trait]
impl FrameVerifier for NeynarVerifier {
    async fn verify(&self, message_bytes_hex: &str) -> Result<Verification, VerifyError> {
        let response = self
            .client
            .post(self.validate_url())
            .header("accept", "application/json")
            .header("api_key", &self.api_key)
            .json(&json!({ "message_bytes_in_hex": message_bytes_hex }))
            .send()
            .await
            .map_err(|e| VerifyError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(VerifyError::Transport(format!("status {status}")));
        }

        let body: ValidateResponse = response
            .json()
            .await
            .map_err(|e| VerifyError::Malformed(e.to_string()))?;

        Ok(body.into())
    }
}
