//! Admin landing page with the navigation rail.

use leptos::prelude::*;

use crate::components::protected_route::ProtectedRoute;
use crate::components::sidebar::Sidebar;
use crate::net::types::Role;
use crate::state::session::SessionStore;
use crate::util::auth::GuardPolicy;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let email = move || store.get().email().unwrap_or_default().to_owned();

    view! {
        <ProtectedRoute policy=GuardPolicy::roles(&[Role::ADMIN])>
            <div class="admin-layout">
                <Sidebar/>
                <section class="admin-layout__content">
                    <h1>"Admin dashboard"</h1>
                    <p>"Signed in as " {email}</p>
                </section>
            </div>
        </ProtectedRoute>
    }
}
