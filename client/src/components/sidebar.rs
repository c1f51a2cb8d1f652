//! Admin navigation rail.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::locale::{localized, split_locale, use_locale};

/// Sidebar entries as `(label, locale-relative path)`.
pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("Dashboard", "/admin/dashboard"),
    ("Users & suppliers", "/admin/users"),
    ("Products", "/admin/products"),
    ("Categories", "/admin/categories"),
    ("Settings", "/admin/settings"),
];

/// Whether `item` is the section `pathname` (a full, locale-prefixed path) sits in.
pub fn is_active(pathname: &str, item: &str) -> bool {
    let (_, rest) = split_locale(pathname);
    let rest = rest.trim_end_matches('/');
    rest == item || rest.strip_prefix(item).is_some_and(|tail| tail.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let locale = use_locale();
    let location = use_location();
    let collapsed = RwSignal::new(false);

    view! {
        <aside class="sidebar" class:sidebar--collapsed=move || collapsed.get()>
            <button class="sidebar__toggle" on:click=move |_| collapsed.update(|c| *c = !*c)>
                {move || if collapsed.get() { "»" } else { "«" }}
            </button>
            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(label, path)| {
                        view! {
                            <a
                                class="sidebar__item"
                                class:sidebar__item--active=move || is_active(&location.pathname.get(), path)
                                href=move || localized(locale.get(), path)
                            >
                                <span class="sidebar__label">{label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
