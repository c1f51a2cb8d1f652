//! Forgot password: request a reset link by email.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::form_alert::FormAlert;
use crate::flows::forgot_link::ForgotLinkFlow;
use crate::net::api::ApiClient;
use crate::util::locale::{localized, use_locale};

#[component]
pub fn ForgotPasswordLinkPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let locale = use_locale();
    let flow = RwSignal::new(ForgotLinkFlow::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(request) = flow.try_update(ForgotLinkFlow::begin_submit).flatten() else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.request_password_reset(&request.email).await;
            if let Err(e) = &result {
                leptos::logging::log!("password reset request: {e}");
            }
            flow.update(|f| f.finish_submit(result));
        });
    };

    let busy = move || flow.with(|f| f.status.is_submitting());
    let status = Signal::derive(move || flow.with(|f| f.status.clone()));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset your password"</h1>
                <Show when=move || !flow.with(ForgotLinkFlow::is_sent)>
                    <form class="auth-form" on:submit=on_submit.clone()>
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || flow.with(|f| f.email.clone())
                            on:input=move |ev| flow.update(|f| f.email = event_target_value(&ev))
                        />
                        <button class="auth-button" type="submit" disabled=busy>
                            "Send reset link"
                        </button>
                    </form>
                </Show>
                <FormAlert status=status/>
                <div class="auth-card__links">
                    <a href=move || localized(locale.get(), "/forgot-password-otp")>"Use a code instead"</a>
                    <a href=move || localized(locale.get(), "/login")>"Back to log in"</a>
                </div>
            </div>
        </div>
    }
}
