//! Forgot password: enter the emailed code and a new password.
//!
//! The address comes from the path. Arriving without one sends the user back
//! to the request screen.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::replace;
use crate::components::form_alert::FormAlert;
use crate::flows::OTP_LENGTH;
use crate::flows::reset_otp::{REQUEST_CODE_PATH, ResetOtpFlow, email_from_segment};
use crate::net::api::ApiClient;
use crate::util::locale::{localized, use_locale};

#[component]
pub fn ResetOtpVerifyPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let locale = use_locale();
    let navigate = use_navigate();
    let email = use_params_map()
        .with_untracked(|p| p.get("email"))
        .map(|segment| email_from_segment(&segment))
        .unwrap_or_default();
    let flow = RwSignal::new(ResetOtpFlow::for_email(&email));

    Effect::new(move || {
        if flow.with(ResetOtpFlow::missing_email) {
            navigate(&localized(locale.get(), REQUEST_CODE_PATH), replace());
        }
    });

    let on_verify = {
        let api = api.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let Some(request) = flow.try_update(ResetOtpFlow::begin_verify).flatten() else {
                return;
            };
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = api.verify_reset_code(&request).await;
                flow.update(|f| f.finish_verify(result));
            });
        }
    };

    let on_resend = move |_: leptos::ev::MouseEvent| {
        let Some(request) = flow.try_update(ResetOtpFlow::begin_resend).flatten() else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.send_reset_otp(&request.email).await;
            flow.update(|f| f.finish_resend(result));
        });
    };

    let busy = move || flow.with(|f| f.status.is_submitting());
    let status = Signal::derive(move || flow.with(|f| f.status.clone()));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Choose a new password"</h1>
                <p class="auth-card__subtitle">{move || format!("Code sent to {}", flow.with(|f| f.email.clone()))}</p>
                <Show when=move || !flow.with(ResetOtpFlow::is_done)>
                    <form class="auth-form" on:submit=on_verify.clone()>
                        <input
                            class="auth-input auth-input--code"
                            type="text"
                            inputmode="numeric"
                            maxlength=OTP_LENGTH.to_string()
                            placeholder="123456"
                            prop:value=move || flow.with(|f| f.otp.clone())
                            on:input=move |ev| flow.update(|f| f.otp = event_target_value(&ev))
                        />
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
                        <button class="auth-link" type="button" disabled=busy on:click=on_resend.clone()>
                            "Send a new code"
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
