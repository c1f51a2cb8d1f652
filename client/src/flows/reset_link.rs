//! Password reset from an emailed link carrying `uid` and `token`.

#[cfg(test)]
#[path = "reset_link_test.rs"]
mod reset_link_test;

use super::{FormStatus, validate_new_password};
use crate::net::error::ApiError;
use crate::net::types::ResetConfirmRequest;

pub const LINK_INVALID: &str = "Link expired or invalid";
pub const RESET_DONE: &str = "Password reset successful. You can now log in.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetLinkFlow {
    pub uid: String,
    pub token: String,
    pub password: String,
    pub confirm: String,
    pub status: FormStatus,
}

impl ResetLinkFlow {
    #[must_use]
    pub fn new(uid: &str, token: &str) -> Self {
        Self { uid: uid.to_owned(), token: token.to_owned(), ..Self::default() }
    }

    pub fn begin_submit(&mut self) -> Option<ResetConfirmRequest> {
        if self.status.is_submitting() {
            return None;
        }
        if self.uid.is_empty() || self.token.is_empty() {
            self.status.reject(LINK_INVALID);
            return None;
        }
        match validate_new_password(&self.password, &self.confirm) {
            Ok(password) => self.status.try_start().then(|| ResetConfirmRequest {
                uid: self.uid.clone(),
                token: self.token.clone(),
                password,
            }),
            Err(message) => {
                self.status.reject(message);
                None
            }
        }
    }

    pub fn finish_submit(&mut self, result: Result<(), ApiError>) {
        self.status = match result {
            Ok(()) => FormStatus::Success(RESET_DONE.to_owned()),
            Err(e) => FormStatus::Error(e.user_message(LINK_INVALID)),
        };
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status.success().is_some()
    }
}
