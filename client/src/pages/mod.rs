//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each auth page holds its flow in a signal, runs the `begin_*` step on
//! submit, awaits the `ApiClient` call in a local task and feeds the result to
//! `finish_*`. Effects returned by a flow are applied here so every page
//! commits sessions and navigates the same way.


pub mod admin_dashboard;
pub mod dashboard;
pub mod forgot_password_link;
pub mod forgot_password_otp;
pub mod home;
pub mod login;
pub mod reset_link;
pub mod reset_otp_verify;
pub mod signup;

use leptos_router::NavigateOptions;

use crate::flows::FlowEffect;
use crate::net::types::Identity;
use crate::util::locale::{Locale, localized};

/// Replace the current history entry instead of pushing a new one.
pub(crate) fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Localized target and history mode for `effect`.
pub(crate) fn effect_target(effect: &FlowEffect, locale: Locale) -> (String, bool) {
    let target = localized(locale, effect.destination());
    (target, matches!(effect, FlowEffect::SignedIn(_)))
}

/// Carry out a finished flow step: commit a sign-in, then navigate.
///
/// A sign-in replaces the history entry so "back" does not return to the form.
pub(crate) fn apply_flow_effect<F>(effect: FlowEffect, commit: impl FnOnce(Identity), locale: Locale, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    let (target, replace_entry) = effect_target(&effect, locale);
    if let FlowEffect::SignedIn(identity) = effect {
        commit(identity);
    }
    navigate(&target, if replace_entry { replace() } else { NavigateOptions::default() });
}
