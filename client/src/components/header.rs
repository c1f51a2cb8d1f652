//! Top bar with brand link and the session toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session for the avatar and email. Logout goes through the
//! backend first: the cookies are HttpOnly, so only the backend can clear
//! them, and a failed call leaves the local session untouched.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::state::session::SessionStore;
use crate::util::locale::{localized, use_locale};
use crate::util::navigation::LOGIN_PATH;

const AVATAR_FALLBACK: char = 'U';

/// Uppercased first letter of the email, `U` when there is none.
pub fn avatar_initial(email: Option<&str>) -> char {
    email
        .and_then(|e| e.trim().chars().next())
        .map_or(AVATAR_FALLBACK, |c| c.to_uppercase().next().unwrap_or(c))
}

/// Log out on the backend, then run `on_signed_out`.
///
/// # Errors
///
/// Returns the backend error; `on_signed_out` is not run in that case.
pub async fn sign_out(api: &ApiClient, on_signed_out: impl FnOnce()) -> Result<(), ApiError> {
    api.logout().await?;
    on_signed_out();
    Ok(())
}

#[component]
pub fn Header() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let store = expect_context::<SessionStore>();
    let locale = use_locale();
    let navigate = use_navigate();

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match sign_out(&api, || store.mark_logged_out()).await {
                Ok(()) => navigate(&localized(locale.get_untracked(), LOGIN_PATH), NavigateOptions::default()),
                Err(e) => leptos::logging::warn!("logout failed: {e}"),
            }
        });
    };

    let email = move || store.get().email().unwrap_or_default().to_owned();

    view! {
        <header class="site-header">
            <a class="site-header__brand" href=move || localized(locale.get(), "/")>
                "Booking"
            </a>
            <nav class="site-header__actions">
                <Show
                    when=move || store.get().is_authenticated()
                    fallback=move || {
                        view! {
                            <a class="site-header__login" href=move || localized(locale.get(), LOGIN_PATH)>
                                "Log in"
                            </a>
                        }
                    }
                >
                    <span class="site-header__avatar">
                        {move || avatar_initial(store.get().email()).to_string()}
                    </span>
                    <span class="site-header__email">{email}</span>
                    <button class="site-header__logout" on:click=on_logout.clone()>
                        "Log out"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
