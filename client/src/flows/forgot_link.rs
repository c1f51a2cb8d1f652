//! Forgot-password by emailed link.
//!
//! The confirmation never depends on the backend's answer: an unknown address
//! (`404`), a sent link and an unreachable backend all read the same, so the
//! screen cannot be used to probe which accounts exist.

#[cfg(test)]
#[path = "forgot_link_test.rs"]
mod forgot_link_test;

use super::{FormStatus, validate_email};
use crate::net::types::EmailRequest;

pub const RESET_LINK_SENT: &str = "If an account exists for that email, a reset link is on its way.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForgotLinkFlow {
    pub email: String,
    pub status: FormStatus,
}

impl ForgotLinkFlow {
    pub fn begin_submit(&mut self) -> Option<EmailRequest> {
        if self.status.is_submitting() {
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

    /// Takes the call's outcome only to discard it.
    pub fn finish_submit<T, E>(&mut self, _result: Result<T, E>) {
        self.status = FormStatus::Success(RESET_LINK_SENT.to_owned());
    }

    #[must_use]
    pub fn is_sent(&self) -> bool {
        self.status.success().is_some()
    }
}
