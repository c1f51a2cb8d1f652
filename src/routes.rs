//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only renders the Leptos app and serves its assets; every API call
//! goes from the browser straight to the booking backend. Requests without a
//! locale prefix are redirected to the default locale before routing.

use std::path::Path;

use axum::Router;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use client::util::locale::locale_prefix_redirect;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Leptos SSR app, `/pkg` assets from `site_root`, and the host probes.
pub fn app(leptos_options: LeptosOptions, site_root: &Path) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    with_host_layers(
        probe_routes()
            .merge(leptos_router)
            .nest_service("/pkg", ServeDir::new(site_root.join("pkg"))),
    )
}

fn probe_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Fallback, locale redirect, compression and request tracing.
pub(crate) fn with_host_layers(router: Router) -> Router {
    router
        .fallback(not_found)
        .layer(middleware::from_fn(locale_redirect))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn locale_redirect(request: Request, next: Next) -> Response {
    let Some(target) = locale_prefix_redirect(request.uri().path()) else {
        return next.run(request).await;
    };
    let target = match request.uri().query() {
        Some(query) => format!("{target}?{query}"),
        None => target,
    };
    tracing::debug!(from = %request.uri(), to = %target, "locale redirect");
    Redirect::temporary(&target).into_response()
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
