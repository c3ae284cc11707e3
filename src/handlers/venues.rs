use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::Form as MultiForm;
use chrono::Utc;
use tower_cookies::Cookies;

use super::{flash, invalid_form, RecordId};
use crate::{
    db::repositories::VenueRepository,
    error::Result,
    forms::{FormErrors, SearchForm, VenueForm},
    services,
    state::AppState,
    templates::{search_results_page, venue_form_page, venue_page, venues_page, FormMode},
};

/// Venues grouped by city and state
pub async fn list_venues(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<Html<String>> {
    let areas = services::venue_areas(&state.db, Utc::now()).await?;
    Ok(Html(
        venues_page(&areas, flash::take(&cookies).as_deref()).into_string(),
    ))
}

pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>> {
    let results = services::search_venues(&state.db, &form.search_term, Utc::now()).await?;
    tracing::debug!(
        "Venue search '{}' matched {}",
        form.search_term,
        results.count
    );
    Ok(Html(
        search_results_page("/venues", form.search_term.trim(), &results).into_string(),
    ))
}

pub async fn show_venue(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    cookies: Cookies,
) -> Result<Html<String>> {
    let detail = services::venue_detail(&state.db, id, Utc::now()).await?;
    Ok(Html(
        venue_page(&detail, flash::take(&cookies).as_deref()).into_string(),
    ))
}

pub async fn create_venue_form() -> Html<String> {
    Html(
        venue_form_page(
            FormMode::Create,
            &VenueForm::default(),
            &FormErrors::default(),
        )
        .into_string(),
    )
}

pub async fn create_venue(
    State(state): State<AppState>,
    cookies: Cookies,
    MultiForm(form): MultiForm<VenueForm>,
) -> Result<Response> {
    let form = form.trimmed();
    let model = match form.to_active_model() {
        Ok(model) => model,
        Err(errors) => {
            return Ok(invalid_form(venue_form_page(
                FormMode::Create,
                &form,
                &errors,
            )))
        }
    };

    let venue = VenueRepository::new(state.db.clone())
        .create(model)
        .await
        .map_err(|e| e.while_writing("Venue", &form.name, "listed"))?;

    flash::push(
        &cookies,
        format!("Venue {} was successfully listed!", venue.name),
    );
    Ok(Redirect::to(&format!("/venues/{}", venue.id)).into_response())
}

pub async fn edit_venue_form(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Html<String>> {
    let venue = VenueRepository::new(state.db.clone()).get(id).await?;
    Ok(Html(
        venue_form_page(
            FormMode::Edit(id),
            &VenueForm::from_model(&venue),
            &FormErrors::default(),
        )
        .into_string(),
    ))
}

pub async fn edit_venue(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    cookies: Cookies,
    MultiForm(form): MultiForm<VenueForm>,
) -> Result<Response> {
    let form = form.trimmed();
    let changes = match form.to_active_model() {
        Ok(changes) => changes,
        Err(errors) => {
            return Ok(invalid_form(venue_form_page(
                FormMode::Edit(id),
                &form,
                &errors,
            )))
        }
    };

    let venue = VenueRepository::new(state.db.clone())
        .update(id, changes)
        .await
        .map_err(|e| e.while_writing("Venue", &form.name, "edited"))?;

    flash::push(
        &cookies,
        format!("Venue {} was successfully edited!", venue.name),
    );
    Ok(Redirect::to(&format!("/venues/{}", venue.id)).into_response())
}

/// Deletes a venue and its shows.
///
/// The detail page issues this through htmx, which follows `HX-Redirect`
/// rather than a 3xx; plain clients get a regular redirect.
pub async fn delete_venue(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    headers: HeaderMap,
    cookies: Cookies,
) -> Result<Response> {
    let venue = VenueRepository::new(state.db.clone())
        .delete(id)
        .await
        .map_err(|e| e.while_writing("Venue", &id.to_string(), "deleted"))?;

    flash::push(
        &cookies,
        format!("Venue {} was successfully deleted!", venue.name),
    );

    if headers.contains_key("hx-request") {
        Ok((StatusCode::OK, [("HX-Redirect", "/")]).into_response())
    } else {
        Ok(Redirect::to("/").into_response())
    }
}
