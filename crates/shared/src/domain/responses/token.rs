use serde::{Deserialize, Serialize};

/// A freshly issued access/refresh pair. Never serialized into a response
/// body; the transport layer moves it into cookies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
