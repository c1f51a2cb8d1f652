//! Static page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"© Booking. All rights reserved."</p>
        </footer>
    }
}
