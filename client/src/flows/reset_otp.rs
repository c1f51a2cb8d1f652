//! Forgot-password by emailed code.
//!
//! Two screens share this machine: `RequestCode` asks for the address and
//! hands off to the verify screen, whose path carries the address; `Verify`
//! takes the code and the new password twice.

#[cfg(test)]
#[path = "reset_otp_test.rs"]
mod reset_otp_test;

use super::{FlowEffect, FormStatus, validate_email, validate_new_password, validate_otp};
use crate::net::error::ApiError;
use crate::net::types::{EmailRequest, ResetCodeRequest};

pub const REQUEST_CODE_PATH: &str = "/forgot-password-otp";
pub const REQUEST_FAILED: &str = "Something went wrong. Try again.";
pub const CODE_INVALID: &str = "Invalid or expired code";
pub const RESET_DONE: &str = "Password reset successful";
pub const CODE_RESENT: &str = "New code sent!";
pub const RESEND_FAILED: &str = "Could not send a new code. Try again later.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResetOtpPhase {
    #[default]
    RequestCode,
    Verify,
}

/// Locale-relative path of the verify screen for `email`.
#[must_use]
pub fn verify_path(email: &str) -> String {
    format!("{REQUEST_CODE_PATH}/{}", urlencoding::encode(email))
}

/// Address carried in a verify-screen path segment.
#[must_use]
pub fn email_from_segment(segment: &str) -> String {
    urlencoding::decode(segment).map_or_else(|_| segment.to_owned(), std::borrow::Cow::into_owned)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetOtpFlow {
    pub phase: ResetOtpPhase,
    pub email: String,
    pub otp: String,
    pub password: String,
    pub confirm: String,
    pub status: FormStatus,
}

impl ResetOtpFlow {
    /// Verify-screen state for an address taken from the path.
    #[must_use]
    pub fn for_email(email: &str) -> Self {
        Self { phase: ResetOtpPhase::Verify, email: email.trim().to_owned(), ..Self::default() }
    }

    /// The verify screen needs an address to act on.
    #[must_use]
    pub fn missing_email(&self) -> bool {
        self.phase == ResetOtpPhase::Verify && self.email.is_empty()
    }

    pub fn begin_request(&mut self) -> Option<EmailRequest> {
        if self.status.is_submitting() || self.phase != ResetOtpPhase::RequestCode {
            return None;
        }
        match validate_email(&self.email) {
            Ok(email) => self.status.try_start().then_some(EmailRequest { email }),
            Err(message) => {
                self.status.reject(message);
                None
            }
        }
    }

    pub fn finish_request(&mut self, result: Result<(), ApiError>) -> Option<FlowEffect> {
        match result {
            Ok(()) => {
                self.status = FormStatus::Idle;
                Some(FlowEffect::Navigate(verify_path(self.email.trim())))
            }
            Err(e) => {
                self.status = FormStatus::Error(e.user_message(REQUEST_FAILED));
                None
            }
        }
    }

    pub fn begin_verify(&mut self) -> Option<ResetCodeRequest> {
        if self.status.is_submitting() || self.phase != ResetOtpPhase::Verify {
            return None;
        }
        let request = validate_new_password(&self.password, &self.confirm).and_then(|password| {
            validate_otp(&self.otp).map(|otp| ResetCodeRequest { email: self.email.clone(), otp, password })
        });
        match request {
            Ok(request) => self.status.try_start().then_some(request),
            Err(message) => {
                self.status.reject(message);
                None
            }
        }
    }

    pub fn finish_verify(&mut self, result: Result<(), ApiError>) {
        self.status = match result {
            Ok(()) => FormStatus::Success(RESET_DONE.to_owned()),
            Err(e) => FormStatus::Error(e.user_message(CODE_INVALID)),
        };
    }

    pub fn begin_resend(&mut self) -> Option<EmailRequest> {
        if self.phase != ResetOtpPhase::Verify || self.email.is_empty() || !self.status.try_start() {
            return None;
        }
        Some(EmailRequest { email: self.email.clone() })
    }

    pub fn finish_resend(&mut self, result: Result<(), ApiError>) {
        self.status = match result {
            Ok(()) => FormStatus::Info(CODE_RESENT.to_owned()),
            Err(_) => FormStatus::Error(RESEND_FAILED.to_owned()),
        };
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status.success().is_some()
    }
}
