//! Locale prefixes for app routes.
//!
//! Every app route lives under `/{locale}/...`. The client never fails on an
//! unknown prefix: it renders in the default locale, and the host redirects
//! unprefixed paths before they reach the router.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Router parameter holding the locale segment.
pub const LOCALE_PARAM: &str = "locale";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

pub const SUPPORTED_LOCALES: [Locale; 2] = [Locale::En, Locale::Fr];

impl Locale {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Exact match against a supported code.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        SUPPORTED_LOCALES.into_iter().find(|l| l.code() == raw)
    }

    /// Locale for a route segment, falling back to the default.
    #[must_use]
    pub fn from_segment(segment: Option<&str>) -> Self {
        segment.and_then(Self::parse).unwrap_or_default()
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Prefix a locale-relative path (`/login`) with `locale`.
#[must_use]
pub fn localized(locale: Locale, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        format!("/{}", locale.code())
    } else {
        format!("/{}/{path}", locale.code())
    }
}

/// Split a full path into its locale and the locale-relative rest.
#[must_use]
pub fn split_locale(path: &str) -> (Option<Locale>, &str) {
    let trimmed = path.trim_start_matches('/');
    let (first, rest) = trimmed.split_once('/').unwrap_or((trimmed, ""));
    match Locale::parse(first) {
        Some(locale) if rest.is_empty() => (Some(locale), "/"),
        Some(locale) => (Some(locale), &path[path.len() - rest.len() - 1..]),
        None => (None, path),
    }
}

const UNPREFIXED: [&str; 3] = ["api", "pkg", "healthz"];

/// Target of the host's locale redirect, or `None` when `path` is served as-is.
///
/// Paths already carrying a supported locale, backend and asset paths, and
/// file-like paths (last segment contains a dot) are left alone.
#[must_use]
pub fn locale_prefix_redirect(path: &str) -> Option<String> {
    let trimmed = path.trim_start_matches('/');
    let first = trimmed.split('/').next().unwrap_or_default();
    if Locale::parse(first).is_some() || UNPREFIXED.contains(&first) {
        return None;
    }
    let last = trimmed.rsplit('/').next().unwrap_or_default();
    if last.contains('.') {
        return None;
    }
    Some(localized(Locale::default(), trimmed))
}

/// Locale of the current route.
pub fn use_locale() -> Memo<Locale> {
    let params = use_params_map();
    Memo::new(move |_| params.with(|p| Locale::from_segment(p.get(LOCALE_PARAM).as_deref())))
}
