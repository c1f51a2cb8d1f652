//! Login screen: credentials, then an OTP step for unverified accounts.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::{FlowEffect, FormStatus, validate_email, validate_otp, validate_password};
use crate::net::error::ApiError;
use crate::net::types::{EmailRequest, Identity, LoginOutcome, LoginRequest, OtpRequest};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const OTP_INVALID: &str = "OTP invalid or expired";
pub const OTP_RESENT: &str = "OTP resent!";
pub const RESEND_FAILED: &str = "Could not resend OTP. Try again later.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Credentials,
    Otp,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFlow {
    pub phase: LoginPhase,
    pub email: String,
    pub password: String,
    pub otp: String,
    pub status: FormStatus,
}

impl LoginFlow {
    pub fn begin_login(&mut self) -> Option<LoginRequest> {
        if self.status.is_submitting() || self.phase != LoginPhase::Credentials {
            return None;
        }
        let request = validate_email(&self.email)
            .and_then(|email| validate_password(&self.password).map(|password| LoginRequest { email, password }));
        match request {
            Ok(request) => self.status.try_start().then_some(request),
            Err(message) => {
                self.status.reject(message);
                None
            }
        }
    }

    pub fn finish_login(&mut self, result: Result<LoginOutcome, ApiError>) -> Option<FlowEffect> {
        match result {
            Ok(LoginOutcome::VerificationRequired { message }) => {
                self.phase = LoginPhase::Otp;
                self.status = FormStatus::Info(message);
                None
            }
            Ok(LoginOutcome::SignedIn(identity)) => {
                self.status = FormStatus::Idle;
                Some(FlowEffect::SignedIn(identity))
            }
            Err(e) => {
                self.status = FormStatus::Error(e.user_message(INVALID_CREDENTIALS));
                None
            }
        }
    }

    /// Payloads for verify-otp and the follow-up login that issues cookies.
    pub fn begin_verify(&mut self) -> Option<(OtpRequest, LoginRequest)> {
        if self.status.is_submitting() || self.phase != LoginPhase::Otp {
            return None;
        }
        let requests = validate_otp(&self.otp).map(|otp| {
            let email = self.email.trim().to_owned();
            (
                OtpRequest { email: email.clone(), otp },
                LoginRequest { email, password: self.password.clone() },
            )
        });
        match requests {
            Ok(requests) => self.status.try_start().then_some(requests),
            Err(message) => {
                self.status.reject(message);
                None
            }
        }
    }

    pub fn finish_verify(&mut self, result: Result<Identity, ApiError>) -> Option<FlowEffect> {
        match result {
            Ok(identity) => {
                self.status = FormStatus::Idle;
                Some(FlowEffect::SignedIn(identity))
            }
            Err(e) => {
                self.status = FormStatus::Error(e.user_message(OTP_INVALID));
                None
            }
        }
    }

    pub fn begin_resend(&mut self) -> Option<EmailRequest> {
        if self.phase != LoginPhase::Otp || !self.status.try_start() {
            return None;
        }
        Some(EmailRequest { email: self.email.trim().to_owned() })
    }

    pub fn finish_resend(&mut self, result: Result<(), ApiError>) {
        self.status = match result {
            Ok(()) => FormStatus::Info(OTP_RESENT.to_owned()),
            Err(_) => FormStatus::Error(RESEND_FAILED.to_owned()),
        };
    }
}
