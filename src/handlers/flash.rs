//! One-shot flash messages carried in a cookie between a redirect and the
//! next page render.

use tower_cookies::{Cookie, Cookies};

const FLASH_COOKIE: &str = "flash";

/// Queues a message for the next rendered page.
pub fn push(cookies: &Cookies, message: impl AsRef<str>) {
    let value = urlencoding::encode(message.as_ref()).into_owned();
    cookies.add(
        Cookie::build((FLASH_COOKIE, value))
            .path("/")
            .http_only(true)
            .build(),
    );
}

/// Reads and clears the pending message, if any.
pub fn take(cookies: &Cookies) -> Option<String> {
    let cookie = cookies.get(FLASH_COOKIE)?;
    cookies.remove(Cookie::build((FLASH_COOKIE, "")).path("/").build());

    match urlencoding::decode(cookie.value()) {
        Ok(message) if !message.is_empty() => Some(message.into_owned()),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!("Dropping undecodable flash cookie: {}", e);
            None
        }
    }
}
