//! Localized landing page.

use leptos::prelude::*;

use crate::flows::DASHBOARD_PATH;
use crate::state::session::SessionStore;
use crate::util::locale::{localized, use_locale};

#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let locale = use_locale();

    view! {
        <section class="home">
            <h1>"Book trusted services near you"</h1>
            <Show
                when=move || store.get().is_authenticated()
                fallback=move || {
                    view! {
                        <div class="home__actions">
                            <a class="auth-button" href=move || localized(locale.get(), "/signup")>"Get started"</a>
                            <a class="auth-link" href=move || localized(locale.get(), "/login")>"Log in"</a>
                        </div>
                    }
                }
            >
                <div class="home__actions">
                    <a class="auth-button" href=move || localized(locale.get(), DASHBOARD_PATH)>"Go to dashboard"</a>
                </div>
            </Show>
        </section>
    }
}
