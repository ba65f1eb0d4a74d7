//! Helpers for cookies.

use cookie::Cookie;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

/// Cookie carrying the caller's access token for API calls.
pub const ACCESS_TOKEN_COOKIE: &str = "users_access_token";

/// Full `document.cookie` string, `None` outside a browser document.
pub fn raw_cookies() -> Option<String> {
    let document = window()?.document()?;
    let html_doc: &HtmlDocument = document.unchecked_ref();
    html_doc.cookie().ok()
}

/// Looks `name` up in a raw `;`-separated cookie header.
///
/// First match wins. A cookie present with an empty value yields
/// `Some("")`, not `None`; callers branch on found-empty vs not-found.
pub fn find_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .filter_map(|entry| Cookie::parse(entry.trim()).ok())
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
}

/// Value of the cookie `name` in the current document, if set.
pub fn get_cookie(name: &str) -> Option<String> {
    find_cookie(&raw_cookies()?, name)
}
