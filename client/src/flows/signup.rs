//! Signup screen: registration form, then mandatory email OTP, then login.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use super::{FlowEffect, FormStatus, validate_email, validate_otp, validate_password};
use crate::net::error::ApiError;
use crate::net::types::{EmailRequest, Identity, LoginRequest, OtpRequest, RegistrationRequest, Role};

pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const ACCOUNT_CREATED: &str = "Account created! Check your email for a 6-digit code.";
pub const OTP_INVALID: &str = "Invalid / expired OTP";
pub const OTP_RESENT: &str = "OTP resent. Please check your inbox.";
pub const RESEND_FAILED: &str = "Could not resend OTP. Try again later.";

/// Roles a visitor may pick when registering.
pub const SIGNUP_ROLES: [&str; 2] = [Role::CUSTOMER, Role::SUPPLIER];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignupPhase {
    #[default]
    Form,
    Otp,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupFlow {
    pub phase: SignupPhase,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub otp: String,
    pub status: FormStatus,
}

impl Default for SignupFlow {
    fn default() -> Self {
        Self {
            phase: SignupPhase::Form,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::customer(),
            otp: String::new(),
            status: FormStatus::Idle,
        }
    }
}

impl SignupFlow {
    pub fn begin_register(&mut self) -> Option<RegistrationRequest> {
        if self.status.is_submitting() || self.phase != SignupPhase::Form {
            return None;
        }
        let request = validate_email(&self.email).and_then(|email| {
            validate_password(&self.password).map(|password| RegistrationRequest {
                first_name: self.first_name.trim().to_owned(),
                last_name: self.last_name.trim().to_owned(),
                email,
                password,
                role: self.role.clone(),
            })
        });
        match request {
            Ok(request) => self.status.try_start().then_some(request),
            Err(message) => {
                self.status.reject(message);
                None
            }
        }
    }

    /// Registration always continues to the OTP step on success.
    pub fn finish_register(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.phase = SignupPhase::Otp;
                self.status = FormStatus::Info(ACCOUNT_CREATED.to_owned());
            }
            Err(e) => self.status = FormStatus::Error(e.user_message(REGISTRATION_FAILED)),
        }
    }

    pub fn begin_verify(&mut self) -> Option<(OtpRequest, LoginRequest)> {
        if self.status.is_submitting() || self.phase != SignupPhase::Otp {
            return None;
        }
        match validate_otp(&self.otp) {
            Ok(otp) => {
                let email = self.email.trim().to_owned();
                let requests = (
                    OtpRequest { email: email.clone(), otp },
                    LoginRequest { email, password: self.password.clone() },
                );
                self.status.try_start().then_some(requests)
            }
            Err(message) => {
                self.status.reject(message);
                None
            }
        }
    }

    /// A login response without a role falls back to the role chosen at signup.
    pub fn finish_verify(&mut self, result: Result<Identity, ApiError>) -> Option<FlowEffect> {
        match result {
            Ok(mut identity) => {
                if identity.role.is_none() {
                    identity.role = Some(self.role.clone());
                }
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
        if self.phase != SignupPhase::Otp || !self.status.try_start() {
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
