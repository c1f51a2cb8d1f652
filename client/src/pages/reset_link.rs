//! Password reset from the emailed link.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::form_alert::FormAlert;
use crate::flows::reset_link::ResetLinkFlow;
use crate::net::api::ApiClient;
use crate::util::locale::{localized, use_locale};

#[component]
pub fn ResetLinkPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let locale = use_locale();
    let (uid, token) = use_params_map().with_untracked(|p| (p.get("uid").unwrap_or_default(), p.get("token").unwrap_or_default()));
    let flow = RwSignal::new(ResetLinkFlow::new(&uid, &token));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(request) = flow.try_update(ResetLinkFlow::begin_submit).flatten() else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.confirm_password_reset(&request).await;
            flow.update(|f| f.finish_submit(result));
        });
    };

    let busy = move || flow.with(|f| f.status.is_submitting());
    let status = Signal::derive(move || flow.with(|f| f.status.clone()));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Choose a new password"</h1>
                <Show when=move || !flow.with(ResetLinkFlow::is_done)>
                    <form class="auth-form" on:submit=on_submit.clone()>
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="New password"
                            prop:value=move || flow.with(|f| f.password.clone())
                            on:input=move |ev| flow.update(|f| f.password = event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Confirm password"
                            prop:value=move || flow.with(|f| f.confirm.clone())
                            on:input=move |ev| flow.update(|f| f.confirm = event_target_value(&ev))
                        />
                        <button class="auth-button" type="submit" disabled=busy>
                            "Reset password"
                        </button>
                    </form>
                </Show>
                <FormAlert status=status/>
                <div class="auth-card__links">
                    <a href=move || localized(locale.get(), "/login")>"Back to log in"</a>
                </div>
            </div>
        </div>
    }
}
