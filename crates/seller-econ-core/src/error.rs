use thiserror::Error;

#[derive(Debug, Error)]
pub enum SellerEconError {
    /// Required numeric fields failed validation. Carries the offending
    /// field identifiers so the caller can mark them, not prose.
    #[error("Invalid input: {}", fields.join(", "))]
    InvalidInput { fields: Vec<String> },

    #[error("Storage failure for '{key}': {reason}")]
    Storage { key: String, reason: String },

    #[error("Malformed import payload: {0}")]
    MalformedImport(String),
}

impl From<serde_json::Error> for SellerEconError {
    fn from(e: serde_json::Error) -> Self {
        SellerEconError::MalformedImport(e.to_string())
    }
}
