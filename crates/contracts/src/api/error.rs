use thiserror::Error;

/// Failures of a catalog API call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network or transport failure before a status was received
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-2xx status other than 404
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// 404, or a detail body that carries no entity
    #[error("entity not found")]
    NotFound,

    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound | ApiError::Status(404))
    }
}
