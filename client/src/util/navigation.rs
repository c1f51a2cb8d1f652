//! Full-page navigation outside the router.
//!
//! The session-expired hook fires from inside `ApiClient`, where no router
//! context exists, so it leaves through `window.location` instead.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use super::locale::{localized, split_locale};

pub const LOGIN_PATH: &str = "/login";

/// Login route for the locale of `current_path`; `None` when already there.
#[must_use]
pub fn login_path_for(current_path: &str) -> Option<String> {
    let (locale, rest) = split_locale(current_path);
    if locale.is_some() && rest.trim_end_matches('/') == LOGIN_PATH {
        return None;
    }
    Some(localized(locale.unwrap_or_default(), LOGIN_PATH))
}

/// Hard redirect to the login route of the current locale.
pub fn redirect_to_login() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let Ok(path) = location.pathname() else {
            return;
        };
        if let Some(target) = login_path_for(&path) {
            if let Err(e) = location.set_href(&target) {
                leptos::logging::warn!("login redirect failed: {e:?}");
            }
        }
    }
}
