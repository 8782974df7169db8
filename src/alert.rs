//! Alerts for displaying success and error messages to users.
//!
//! An alert raised while handling a form submission is stored in an encrypted
//! cookie and shown once by the page the client is redirected to.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::Error;

/// The name of the cookie that carries an alert across a redirect.
pub(crate) const NOTICE_COOKIE: &str = "notice";

/// A message for the user with a short summary and optional details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Alert {
    Success { message: String, details: String },
    Error { message: String, details: String },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let (style, message, details) = match self {
            Alert::Success { message, details } => ("alert alert-success", message, details),
            Alert::Error { message, details } => ("alert alert-error", message, details),
        };

        html!(
            div class=(style) role="alert"
            {
                p class="alert-message" { (message) }

                @if !details.is_empty() {
                    p class="alert-details" { (details) }
                }
            }
        )
    }
}

/// Store `alert` in `jar` so that the next page render can display it.
///
/// # Errors
///
/// Returns an [Error::NoticeCookie] if the alert cannot be serialized.
pub(crate) fn set_notice(jar: PrivateCookieJar, alert: &Alert) -> Result<PrivateCookieJar, Error> {
    let value =
        serde_json::to_string(alert).map_err(|error| Error::NoticeCookie(error.to_string()))?;

    Ok(jar.add(
        Cookie::build((NOTICE_COOKIE, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    ))
}

/// Remove the pending alert from `jar`, if there is one.
///
/// A cookie that cannot be decoded is dropped and logged rather than shown.
pub(crate) fn take_notice(jar: PrivateCookieJar) -> (PrivateCookieJar, Option<Alert>) {
    let Some(cookie) = jar.get(NOTICE_COOKIE) else {
        return (jar, None);
    };

    let alert = serde_json::from_str(cookie.value())
        .inspect_err(|error| tracing::warn!("Discarding malformed notice cookie: {error}"))
        .ok();

    (jar.remove(Cookie::build(NOTICE_COOKIE).path("/")), alert)
}
