use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Config,
    Validation,
    Host,
    Render,
    Serialization,
}

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("config error: {0}")]
    Config(String),
    #[error("invalid href '{href}': {reason}")]
    InvalidHref { href: String, reason: String },
    #[error("browser host error: {0}")]
    Host(String),
    #[error("render error: {0}")]
    Render(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SiteError {
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SiteError::Config(_) => ErrorCode::Config,
            SiteError::InvalidHref { .. } => ErrorCode::Validation,
            SiteError::Host(_) => ErrorCode::Host,
            SiteError::Render(_) => ErrorCode::Render,
            SiteError::Serialization(_) => ErrorCode::Serialization,
        }
    }
}
