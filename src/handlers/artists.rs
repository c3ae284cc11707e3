use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::Form as MultiForm;
use chrono::Utc;
use tower_cookies::Cookies;

use super::{flash, invalid_form, RecordId};
use crate::{
    db::repositories::ArtistRepository,
    error::Result,
    forms::{ArtistForm, FormErrors, SearchForm},
    services,
    state::AppState,
    templates::{artist_form_page, artist_page, artists_page, search_results_page, FormMode},
};

/// All artists, sorted by name
pub async fn list_artists(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<Html<String>> {
    let artists = ArtistRepository::new(state.db.clone()).find_names().await?;
    Ok(Html(
        artists_page(&artists, flash::take(&cookies).as_deref()).into_string(),
    ))
}

pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>> {
    let results = services::search_artists(&state.db, &form.search_term, Utc::now()).await?;
    tracing::debug!(
        "Artist search '{}' matched {}",
        form.search_term,
        results.count
    );
    Ok(Html(
        search_results_page("/artists", form.search_term.trim(), &results).into_string(),
    ))
}

pub async fn show_artist(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    cookies: Cookies,
) -> Result<Html<String>> {
    let detail = services::artist_detail(&state.db, id, Utc::now()).await?;
    Ok(Html(
        artist_page(&detail, flash::take(&cookies).as_deref()).into_string(),
    ))
}

pub async fn create_artist_form() -> Html<String> {
    Html(
        artist_form_page(
            FormMode::Create,
            &ArtistForm::default(),
            &FormErrors::default(),
        )
        .into_string(),
    )
}

pub async fn create_artist(
    State(state): State<AppState>,
    cookies: Cookies,
    MultiForm(form): MultiForm<ArtistForm>,
) -> Result<Response> {
    let form = form.trimmed();
    let model = match form.to_active_model() {
        Ok(model) => model,
        Err(errors) => {
            return Ok(invalid_form(artist_form_page(
                FormMode::Create,
                &form,
                &errors,
            )))
        }
    };

    let artist = ArtistRepository::new(state.db.clone())
        .create(model)
        .await
        .map_err(|e| e.while_writing("Artist", &form.name, "listed"))?;

    flash::push(
        &cookies,
        format!("Artist {} was successfully listed!", artist.name),
    );
    Ok(Redirect::to(&format!("/artists/{}", artist.id)).into_response())
}

pub async fn edit_artist_form(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Html<String>> {
    let artist = ArtistRepository::new(state.db.clone()).get(id).await?;
    Ok(Html(
        artist_form_page(
            FormMode::Edit(id),
            &ArtistForm::from_model(&artist),
            &FormErrors::default(),
        )
        .into_string(),
    ))
}

pub async fn edit_artist(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    cookies: Cookies,
    MultiForm(form): MultiForm<ArtistForm>,
) -> Result<Response> {
    let form = form.trimmed();
    let changes = match form.to_active_model() {
        Ok(changes) => changes,
        Err(errors) => {
            return Ok(invalid_form(artist_form_page(
                FormMode::Edit(id),
                &form,
                &errors,
            )))
        }
    };

    let artist = ArtistRepository::new(state.db.clone())
        .update(id, changes)
        .await
        .map_err(|e| e.while_writing("Artist", &form.name, "edited"))?;

    flash::push(
        &cookies,
        format!("Artist {} was successfully edited!", artist.name),
    );
    Ok(Redirect::to(&format!("/artists/{}", artist.id)).into_response())
}
