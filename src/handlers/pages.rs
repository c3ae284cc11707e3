use axum::response::Html;
use tower_cookies::Cookies;

use super::flash;
use crate::{error::AppError, templates::home_page};

pub async fn index(cookies: Cookies) -> Html<String> {
    Html(home_page(flash::take(&cookies).as_deref()).into_string())
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}
