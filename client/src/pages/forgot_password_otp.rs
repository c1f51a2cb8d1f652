//! Forgot password: request a reset code, then continue on the verify screen.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::apply_flow_effect;
use crate::components::form_alert::FormAlert;
use crate::flows::reset_otp::ResetOtpFlow;
use crate::net::api::ApiClient;
use crate::util::locale::{localized, use_locale};

#[component]
pub fn ForgotPasswordOtpPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let locale = use_locale();
    let navigate = use_navigate();
    let flow = RwSignal::new(ResetOtpFlow::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(request) = flow.try_update(ResetOtpFlow::begin_request).flatten() else {
            return;
        };
        let (api, navigate) = (api.clone(), navigate.clone());
        leptos::task::spawn_local(async move {
            let result = api.request_reset_code(&request.email).await;
            if let Some(effect) = flow.try_update(|f| f.finish_request(result)).flatten() {
                apply_flow_effect(effect, |_| {}, locale.get_untracked(), &navigate);
            }
        });
    };

    let busy = move || flow.with(|f| f.status.is_submitting());
    let status = Signal::derive(move || flow.with(|f| f.status.clone()));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset with a code"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || flow.with(|f| f.email.clone())
                        on:input=move |ev| flow.update(|f| f.email = event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=busy>
                        "Send code"
                    </button>
                </form>
                <FormAlert status=status/>
                <div class="auth-card__links">
                    <a href=move || localized(locale.get(), "/forgot-password-link")>"Email me a link instead"</a>
                    <a href=move || localized(locale.get(), "/login")>"Back to log in"</a>
                </div>
            </div>
        </div>
    }
}
