//! Signed-in landing page for customers and suppliers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Content renders only after the route guard authorizes the session; until
//! bootstrap resolves the page is empty.

use leptos::prelude::*;

use crate::components::protected_route::ProtectedRoute;
use crate::net::types::Role;
use crate::state::session::SessionStore;
use crate::util::auth::GuardPolicy;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let email = move || store.get().email().unwrap_or_default().to_owned();
    let role = move || store.get().role().map(ToString::to_string).unwrap_or_default();

    view! {
        <ProtectedRoute policy=GuardPolicy::roles(&[Role::SUPPLIER, Role::CUSTOMER])>
            <section class="dashboard">
                <h1>"Dashboard"</h1>
                <p class="dashboard__welcome">"Welcome, " {email}</p>
                <p class="dashboard__role">"Signed in as " {role}</p>
            </section>
        </ProtectedRoute>
    }
}
