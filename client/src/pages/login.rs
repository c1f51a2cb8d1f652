//! Login page: credentials, then an emailed code when the backend asks for it.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::apply_flow_effect;
use crate::components::form_alert::FormAlert;
use crate::flows::OTP_LENGTH;
use crate::flows::login::{LoginFlow, LoginPhase};
use crate::net::api::{ApiClient, verify_and_sign_in};
use crate::state::session::SessionStore;
use crate::util::locale::{localized, use_locale};

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let store = expect_context::<SessionStore>();
    let locale = use_locale();
    let navigate = use_navigate();
    let flow = RwSignal::new(LoginFlow::default());

    let on_login = {
        let (api, navigate) = (api.clone(), navigate.clone());
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let Some(request) = flow.try_update(LoginFlow::begin_login).flatten() else {
                return;
            };
            let (api, navigate) = (api.clone(), navigate.clone());
            leptos::task::spawn_local(async move {
                let result = api.login(&request).await;
                if let Some(effect) = flow.try_update(|f| f.finish_login(result)).flatten() {
                    apply_flow_effect(effect, |id| store.mark_logged_in(id), locale.get_untracked(), &navigate);
                }
            });
        }
    };

    let on_verify = {
        let (api, navigate) = (api.clone(), navigate.clone());
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let Some((otp, login)) = flow.try_update(LoginFlow::begin_verify).flatten() else {
                return;
            };
            let (api, navigate) = (api.clone(), navigate.clone());
            leptos::task::spawn_local(async move {
                let result = verify_and_sign_in(&api, &otp, &login).await;
                if let Some(effect) = flow.try_update(|f| f.finish_verify(result)).flatten() {
                    apply_flow_effect(effect, |id| store.mark_logged_in(id), locale.get_untracked(), &navigate);
                }
            });
        }
    };

    let on_resend = move |_: leptos::ev::MouseEvent| {
        let Some(request) = flow.try_update(LoginFlow::begin_resend).flatten() else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.resend_otp(&request.email).await;
            flow.update(|f| f.finish_resend(result));
        });
    };

    let busy = move || flow.with(|f| f.status.is_submitting());
    let status = Signal::derive(move || flow.with(|f| f.status.clone()));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Log in"</h1>
                <Show
                    when=move || flow.with(|f| f.phase == LoginPhase::Credentials)
                    fallback=move || {
                        view! {
                            <form class="auth-form" on:submit=on_verify.clone()>
                                <p class="auth-card__subtitle">
                                    {move || format!("Enter the code sent to {}", flow.with(|f| f.email.clone()))}
                                </p>
                                <input
                                    class="auth-input auth-input--code"
                                    type="text"
                                    inputmode="numeric"
                                    maxlength=OTP_LENGTH.to_string()
                                    placeholder="123456"
                                    prop:value=move || flow.with(|f| f.otp.clone())
                                    on:input=move |ev| flow.update(|f| f.otp = event_target_value(&ev))
                                />
                                <button class="auth-button" type="submit" disabled=busy>
                                    "Verify"
                                </button>
                                <button class="auth-link" type="button" disabled=busy on:click=on_resend.clone()>
                                    "Resend code"
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="auth-form" on:submit=on_login.clone()>
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || flow.with(|f| f.email.clone())
                            on:input=move |ev| flow.update(|f| f.email = event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || flow.with(|f| f.password.clone())
                            on:input=move |ev| flow.update(|f| f.password = event_target_value(&ev))
                        />
                        <button class="auth-button" type="submit" disabled=busy>
                            {move || if busy() { "Signing in..." } else { "Log in" }}
                        </button>
                    </form>
                </Show>
                <FormAlert status=status/>
                <div class="auth-card__links">
                    <a href=move || localized(locale.get(), "/forgot-password-link")>"Forgot password?"</a>
                    <a href=move || localized(locale.get(), "/signup")>"Create an account"</a>
                </div>
            </div>
        </div>
    }
}
