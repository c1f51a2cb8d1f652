//! Signup page: account form, then the activation code.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::apply_flow_effect;
use crate::components::form_alert::FormAlert;
use crate::flows::OTP_LENGTH;
use crate::flows::signup::{SIGNUP_ROLES, SignupFlow, SignupPhase};
use crate::net::api::{ApiClient, verify_and_sign_in};
use crate::net::types::Role;
use crate::state::session::SessionStore;
use crate::util::locale::{localized, use_locale};

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let store = expect_context::<SessionStore>();
    let locale = use_locale();
    let navigate = use_navigate();
    let flow = RwSignal::new(SignupFlow::default());

    let on_register = {
        let api = api.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let Some(request) = flow.try_update(SignupFlow::begin_register).flatten() else {
                return;
            };
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = api.register(&request).await;
                flow.update(|f| f.finish_register(result));
            });
        }
    };

    let on_verify = {
        let api = api.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let Some((otp, login)) = flow.try_update(SignupFlow::begin_verify).flatten() else {
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
        let Some(request) = flow.try_update(SignupFlow::begin_resend).flatten() else {
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
                <h1>"Create an account"</h1>
                <Show
                    when=move || flow.with(|f| f.phase == SignupPhase::Form)
                    fallback=move || {
                        view! {
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
                    <form class="auth-form" on:submit=on_register.clone()>
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="First name"
                            prop:value=move || flow.with(|f| f.first_name.clone())
                            on:input=move |ev| flow.update(|f| f.first_name = event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Last name"
                            prop:value=move || flow.with(|f| f.last_name.clone())
                            on:input=move |ev| flow.update(|f| f.last_name = event_target_value(&ev))
                        />
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
                        <select
                            class="auth-input"
                            prop:value=move || flow.with(|f| f.role.to_string())
                            on:change=move |ev| flow.update(|f| f.role = Role::new(&event_target_value(&ev)))
                        >
                            {SIGNUP_ROLES
                                .into_iter()
                                .map(|role| view! { <option value=role>{role}</option> })
                                .collect_view()}
                        </select>
                        <button class="auth-button" type="submit" disabled=busy>
                            "Sign up"
                        </button>
                    </form>
                </Show>
                <FormAlert status=status/>
                <div class="auth-card__links">
                    <a href=move || localized(locale.get(), "/login")>"Already have an account? Log in"</a>
                </div>
            </div>
        </div>
    }
}
