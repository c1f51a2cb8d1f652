//! Wire DTOs for the booking backend's `/api/user/*` endpoints.
//!
//! DESIGN
//! ======
//! Request types mirror the JSON bodies the backend expects field-for-field.
//! Response types are lenient: unknown fields are ignored and optional fields
//! default, so profile additions on the backend never break the client.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// IDENTITY
// =============================================================================

/// Account role as reported by the backend.
///
/// The set is open (`customer`, `supplier`, `admin`, ...). Names are stored
/// trimmed and lowercased so comparisons ignore the backend's casing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Role(String);

impl Role {
    pub const CUSTOMER: &'static str = "customer";
    pub const SUPPLIER: &'static str = "supplier";
    pub const ADMIN: &'static str = "admin";

    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_ascii_lowercase())
    }

    #[must_use]
    pub fn customer() -> Self {
        Self::new(Self::CUSTOMER)
    }

    #[must_use]
    pub fn supplier() -> Self {
        Self::new(Self::SUPPLIER)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.0
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The signed-in user as returned by `login` (`user`) and `token/verify` (`data`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    #[serde(default)]
    pub role: Option<Role>,
}

// =============================================================================
// REQUESTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Body for endpoints that only take an address (resend, reset requests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OtpRequest {
    pub email: String,
    pub otp: String,
}

/// Reset-by-link confirmation; `uid` and `token` come from the emailed link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResetConfirmRequest {
    pub uid: String,
    pub token: String,
    pub password: String,
}

/// Reset-by-code confirmation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResetCodeRequest {
    pub email: String,
    pub otp: String,
    pub password: String,
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Raw `POST /user/login/` body.
#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct LoginWire {
    #[serde(default)]
    pub requires_verification: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<Identity>,
}

/// What a successful login call means for the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The account is inactive; an OTP was mailed and must be verified first.
    VerificationRequired { message: String },
    /// Session cookies were issued for this identity.
    SignedIn(Identity),
}

pub(crate) const DEFAULT_VERIFICATION_MESSAGE: &str = "Check your email for a 6-digit code.";

impl LoginOutcome {
    /// Interpret a login body. `None` when it carries neither a verification
    /// request nor a user.
    pub(crate) fn from_wire(wire: LoginWire) -> Option<Self> {
        if wire.requires_verification {
            let message = wire
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_VERIFICATION_MESSAGE.to_owned());
            return Some(Self::VerificationRequired { message });
        }
        wire.user.map(Self::SignedIn)
    }
}

/// `POST /user/token/verify/` body. The backend answers `200` with
/// `valid: false` for missing or expired access tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TokenStatus {
    #[serde(default)]
    pub valid: bool,
    #[serde(default, rename = "data")]
    pub identity: Option<Identity>,
}

// =============================================================================
// ERROR BODIES
// =============================================================================

/// Pull the most specific human-readable message out of a backend error body.
///
/// Priority: `errors.non_field_errors[0]`, `error`, `detail`, `message`, then
/// the first string of any field-error list (`{"email": ["..."]}`).
#[must_use]
pub fn extract_error_message(body: &serde_json::Value) -> Option<String> {
    let obj = body.as_object()?;

    let non_field = obj
        .get("errors")
        .and_then(|errors| errors.get("non_field_errors"))
        .and_then(first_string);
    if non_field.is_some() {
        return non_field;
    }

    for key in ["error", "detail", "message"] {
        if let Some(text) = obj.get(key).and_then(serde_json::Value::as_str) {
            if !text.trim().is_empty() {
                return Some(text.to_owned());
            }
        }
    }

    let field_errors = obj.get("errors").and_then(serde_json::Value::as_object).unwrap_or(obj);
    field_errors.values().find_map(first_string)
}

fn first_string(value: &serde_json::Value) -> Option<String> {
    value
        .as_array()?
        .iter()
        .find_map(serde_json::Value::as_str)
        .filter(|text| !text.trim().is_empty())
        .map(str::to_owned)
}
