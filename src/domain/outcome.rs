/// Default folder holding the frame images.
pub const DEFAULT_IMAGE_BASE_URL: &str =
    "https://gateway.lighthouse.storage/ipfs/bafybeibx2afoamzspuelag4tbczahvymba7vcha2smpkf2xmezm7f2eepa";

/// What the caller gets to see. Every failure collapses into `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Error,
    NoAddress,
    AlreadyMinted,
}

impl Outcome {
    /// Whether the frame offers a "Try again" button.
    pub fn should_retry(self) -> bool {
        matches!(self, Outcome::Error | Outcome::AlreadyMinted)
    }

    pub fn image(self, images: &ImageSet) -> &str {
        match self {
            Outcome::Success => &images.claimed,
            Outcome::Error => &images.error,
            Outcome::NoAddress => &images.no_address,
            Outcome::AlreadyMinted => &images.claimed,
        }
    }
}

/// Image URLs rendered for each outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSet {
    pub claimed: String,
    pub error: String,
    pub no_address: String,
}

impl ImageSet {
    pub fn from_base(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            claimed: format!("{base}/claimed.jpg"),
            error: format!("{base}/error.png"),
            no_address: format!("{base}/no-address.png"),
        }
    }
}

impl Default for ImageSet {
    fn default() -> Self {
        Self::from_base(DEFAULT_IMAGE_BASE_URL)
    }
}
