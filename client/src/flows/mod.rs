//! Auth screen state machines.
//!
//! ARCHITECTURE
//! ============
//! Every flow splits a submission into three steps so pages can hold the
//! state in a signal while the request is in flight:
//!
//! - `begin_*` (sync): refuses while already submitting, clears the previous
//!   error/info, validates, moves to [`FormStatus::Submitting`], and returns
//!   the request payload. `None` means nothing may be sent.
//! - the `ApiClient` call (async, owned by the page).
//! - `finish_*` (sync): applies the transition and returns an optional
//!   [`FlowEffect`] for the page to carry out.


pub mod forgot_link;
pub mod login;
pub mod reset_link;
pub mod reset_otp;
pub mod signup;

use crate::net::types::Identity;

pub const OTP_LENGTH: usize = 6;
pub const DASHBOARD_PATH: &str = "/dashboard";

pub const EMAIL_REQUIRED: &str = "Enter a valid email address.";
pub const PASSWORD_REQUIRED: &str = "Enter a password.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const OTP_INCOMPLETE: &str = "Enter the 6-digit code.";

/// Single status slot of a form; loading and error are mutually exclusive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Error(String),
    Info(String),
    Success(String),
}

impl FormStatus {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn info(&self) -> Option<&str> {
        match self {
            Self::Info(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn success(&self) -> Option<&str> {
        match self {
            Self::Success(message) => Some(message),
            _ => None,
        }
    }

    /// Enter `Submitting`, replacing any previous error or info, unless a
    /// submission is already running.
    pub(crate) fn try_start(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    /// Record a client-side validation failure.
    pub(crate) fn reject(&mut self, message: &str) {
        *self = Self::Error(message.to_owned());
    }
}

/// Side effect a finished step asks the page to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowEffect {
    /// Commit the identity to the session and go to the dashboard.
    SignedIn(Identity),
    /// Go to a locale-relative path.
    Navigate(String),
}

impl FlowEffect {
    /// Locale-relative destination of the effect.
    #[must_use]
    pub fn destination(&self) -> &str {
        match self {
            Self::SignedIn(_) => DASHBOARD_PATH,
            Self::Navigate(path) => path,
        }
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Trimmed address; must look like `local@domain`.
///
/// # Errors
///
/// Returns [`EMAIL_REQUIRED`] for blank or `@`-less input.
pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email.to_owned()),
        _ => Err(EMAIL_REQUIRED),
    }
}

/// Trimmed code of exactly [`OTP_LENGTH`] characters.
///
/// # Errors
///
/// Returns [`OTP_INCOMPLETE`] otherwise.
pub fn validate_otp(raw: &str) -> Result<String, &'static str> {
    let code = raw.trim();
    if code.chars().count() == OTP_LENGTH {
        Ok(code.to_owned())
    } else {
        Err(OTP_INCOMPLETE)
    }
}

/// Non-empty password (never trimmed).
///
/// # Errors
///
/// Returns [`PASSWORD_REQUIRED`] for an empty password.
pub fn validate_password(raw: &str) -> Result<String, &'static str> {
    if raw.is_empty() { Err(PASSWORD_REQUIRED) } else { Ok(raw.to_owned()) }
}

/// New password entered twice.
///
/// # Errors
///
/// Returns [`PASSWORD_MISMATCH`] when the entries differ, otherwise
/// [`PASSWORD_REQUIRED`] when empty.
pub fn validate_new_password(password: &str, confirm: &str) -> Result<String, &'static str> {
    if password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    validate_password(password)
}
