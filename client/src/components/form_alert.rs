//! Single message slot under an auth form.

#[cfg(test)]
#[path = "form_alert_test.rs"]
mod form_alert_test;

use leptos::prelude::*;

use crate::flows::FormStatus;

/// CSS modifier and text for the status, if it carries a message.
pub fn alert_parts(status: &FormStatus) -> Option<(&'static str, String)> {
    match status {
        FormStatus::Error(message) => Some(("form-alert--error", message.clone())),
        FormStatus::Info(message) => Some(("form-alert--info", message.clone())),
        FormStatus::Success(message) => Some(("form-alert--success", message.clone())),
        FormStatus::Idle | FormStatus::Submitting => None,
    }
}

#[component]
pub fn FormAlert(#[prop(into)] status: Signal<FormStatus>) -> impl IntoView {
    move || {
        alert_parts(&status.get()).map(|(modifier, message)| {
            view! { <p class=format!("form-alert {modifier}") role="alert">{message}</p> }
        })
    }
}
