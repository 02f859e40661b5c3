use serde::Deserialize;

/// Body a Farcaster client posts back when a frame button is pressed.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrameRequest {
    #[serde(default)]
    pub trusted_data: Option<TrustedData>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrustedData {
    #[serde(default)]
    pub message_bytes: Option<String>,
}

impl FrameRequest {
    pub fn with_message(message_bytes: impl Into<String>) -> Self {
        Self {
            trusted_data: Some(TrustedData {
                message_bytes: Some(message_bytes.into()),
            }),
        }
    }

    /// The signed message, hex encoded. Empty strings count as absent.
    pub fn message_bytes(&self) -> Option<&str> {
        self.trusted_data
            .as_ref()
            .and_then(|data| data.message_bytes.as_deref())
            .filter(|bytes| !bytes.is_empty())
    }
}

/// The identity that pressed the button.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Interactor {
    pub fid: u64,
    /// Wallet addresses the user has verified on their profile.
    #[serde(default)]
    pub verifications: Vec<String>,
}

impl Interactor {
    pub fn primary_address(&self) -> Option<&str> {
        self.verifications.first().map(String::as_str)
    }
}

/// Answer from the frame verifier.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Verification {
    pub valid: bool,
    pub interactor: Option<Interactor>,
}

impl Verification {
    pub fn valid(interactor: Interactor) -> Self {
        Self {
            valid: true,
            interactor: Some(interactor),
        }
    }

    pub fn invalid() -> Self {
        Self::default()
    }
}
