//! Wrapper that renders its children only for permitted sessions.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;
use crate::util::auth::{GuardPolicy, GuardState, install_route_guard};
use crate::util::locale::use_locale;

/// Renders `children` once the guard authorizes the session; nothing while
/// pending or redirecting.
#[component]
pub fn ProtectedRoute(#[prop(optional)] policy: GuardPolicy, children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let state = install_route_guard(store, policy, use_locale(), use_navigate());

    view! {
        <Show when=move || state.get() == GuardState::Authorized>
            {children()}
        </Show>
    }
}
