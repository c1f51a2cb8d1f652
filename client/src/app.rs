//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Outlet, ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::{footer::Footer, header::Header};
use crate::net::api::ApiClient;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, dashboard::DashboardPage, forgot_password_link::ForgotPasswordLinkPage,
    forgot_password_otp::ForgotPasswordOtpPage, home::HomePage, login::LoginPage, reset_link::ResetLinkPage,
    reset_otp_verify::ResetOtpVerifyPage, signup::SignupPage,
};
use crate::state::session::SessionStore;
use crate::util::locale::{LOCALE_PARAM, Locale, localized};
use crate::util::navigation::redirect_to_login;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and API client, starts the session bootstrap in
/// the browser, and mounts every route under its locale prefix.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::new();
    let api = ApiClient::browser().with_session_expired_hook(redirect_to_login);
    provide_context(store);
    provide_context(api.clone());

    // The backend session lives in HttpOnly cookies; only the browser can ask.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::bootstrap::run_bootstrap(&api, store).await;
    });
    #[cfg(not(feature = "hydrate"))]
    drop(api);

    view! {
        <Stylesheet id="leptos" href="/pkg/booking-web.css"/>
        <Title text="Booking"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DefaultLocaleRedirect/>
                <ParentRoute path=ParamSegment(LOCALE_PARAM) view=Layout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("forgot-password-link") view=ForgotPasswordLinkPage/>
                    <Route
                        path=(
                            StaticSegment("forgot-password-link"),
                            StaticSegment("verify"),
                            ParamSegment("uid"),
                            ParamSegment("token"),
                        )
                        view=ResetLinkPage
                    />
                    <Route path=StaticSegment("forgot-password-otp") view=ForgotPasswordOtpPage/>
                    <Route
                        path=(StaticSegment("forgot-password-otp"), ParamSegment("email"))
                        view=ResetOtpVerifyPage
                    />
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=AdminDashboardPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Header, routed page, footer.
#[component]
fn Layout() -> impl IntoView {
    view! {
        <Header/>
        <main class="page">
            <Outlet/>
        </main>
        <Footer/>
    }
}

#[component]
fn DefaultLocaleRedirect() -> impl IntoView {
    view! { <Redirect path=localized(Locale::default(), "/")/> }
}
