use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use tower_cookies::Cookies;

use super::{flash, invalid_form};
use crate::{
    db::repositories::ShowRepository,
    error::{AppError, Result},
    forms::{FormErrors, ShowForm},
    services,
    state::AppState,
    templates::{show_form_page, shows_page},
};

pub async fn list_shows(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<Html<String>> {
    let shows = services::all_shows(&state.db).await?;
    Ok(Html(
        shows_page(&shows, flash::take(&cookies).as_deref()).into_string(),
    ))
}

pub async fn create_show_form() -> Html<String> {
    Html(show_form_page(&ShowForm::starting_at(Utc::now()), &FormErrors::default()).into_string())
}

pub async fn create_show(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<ShowForm>,
) -> Result<Response> {
    let form = form.trimmed();
    let new_show = match form.to_new_show() {
        Ok(new_show) => new_show,
        Err(errors) => return Ok(invalid_form(show_form_page(&form, &errors))),
    };

    match ShowRepository::new(state.db.clone()).create(new_show).await {
        Ok(_) => {
            flash::push(&cookies, "Show was successfully listed!");
            Ok(Redirect::to("/shows").into_response())
        }
        // Unknown artist or venue id
        Err(AppError::Validation(errors)) => Ok(invalid_form(show_form_page(&form, &errors))),
        Err(e) => Err(e.while_writing("Show", "", "listed")),
    }
}
