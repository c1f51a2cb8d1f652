//! API error taxonomy shared by every flow.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Screens turn an [`ApiError`] into one line of text
//! with [`ApiError::user_message`], preferring what the backend said and
//! falling back to a flow-specific message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::transport::{ApiResponse, TransportError};
use super::types::extract_error_message;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No HTTP response was obtained.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The backend answered with a non-success status.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// A success body did not have the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Login after OTP verification still reported an inactive account.
    #[error("account still requires verification")]
    VerificationPending { message: String },
}

impl ApiError {
    pub(crate) fn rejected(response: &ApiResponse) -> Self {
        Self::Rejected {
            status: response.status,
            message: extract_error_message(&response.body),
        }
    }

    /// HTTP status for rejections.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Text for the screen's error slot.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } | Self::VerificationPending { message } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}
