//! Integration tests for show routes

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
};
use chrono::{Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use sea_orm::{EntityTrait, PaginatorTrait};
use tower::util::ServiceExt;

use gigbook::create_router;
use gigbook::db::entities::show;
use gigbook::state::AppState;
use gigbook::test_utils::*;

fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish();
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn send(state: &AppState, request: Request<Body>) -> Response {
    create_router(state.clone()).oneshot(request).await.unwrap()
}

async fn body_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn test_create_show() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    let artist_id = artist.id.to_string();
    let venue_id = venue.id.to_string();

    let response = send(
        &state,
        post_form(
            "/shows/create",
            &[
                ("artist_id", artist_id.as_str()),
                ("venue_id", venue_id.as_str()),
                ("start_time", "2035-04-01 20:00:00"),
            ],
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/shows");

    let shows = show::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].artist_id, artist.id);
    assert_eq!(shows[0].venue_id, venue.id);
    assert_eq!(
        shows[0].start_time.with_timezone(&Utc),
        Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn test_show_for_missing_artist_inserts_nothing() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let venue_id = venue.id.to_string();

    let response = send(
        &state,
        post_form(
            "/shows/create",
            &[
                ("artist_id", "99"),
                ("venue_id", venue_id.as_str()),
                ("start_time", "2035-04-01 20:00:00"),
            ],
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("No artist with id 99"));
    assert_eq!(show::Entity::find().count(&state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_show_for_missing_venue_inserts_nothing() {
    let state = setup_test_app_state().await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    let artist_id = artist.id.to_string();

    let response = send(
        &state,
        post_form(
            "/shows/create",
            &[
                ("artist_id", artist_id.as_str()),
                ("venue_id", "12"),
                ("start_time", "2035-04-01T20:00"),
            ],
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("No venue with id 12"));
    assert_eq!(show::Entity::find().count(&state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_malformed_show_form_is_rejected() {
    let state = setup_test_app_state().await;

    let response = send(
        &state,
        post_form(
            "/shows/create",
            &[("artist_id", "one"), ("venue_id", ""), ("start_time", "soon")],
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_text(response).await;
    assert!(body.contains("This field is required."));
    assert!(body.contains("Not a valid datetime value."));
    assert_eq!(show::Entity::find().count(&state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_show_listing_is_chronological() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Dueling Pianos Bar", "New York", "NY").await;
    let late = create_test_artist(&state.db, "The Wild Sax Band").await;
    let early = create_test_artist(&state.db, "Matt Quevedo").await;
    create_test_show(&state.db, late.id, venue.id, Utc::now() + Duration::days(20)).await;
    create_test_show(&state.db, early.id, venue.id, Utc::now() - Duration::days(20)).await;

    let response = send(
        &state,
        Request::builder().uri("/shows").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    let first = body.find("Matt Quevedo").unwrap();
    let second = body.find("The Wild Sax Band").unwrap();
    assert!(first < second);
    assert!(body.contains("The Dueling Pianos Bar"));
}

#[tokio::test]
async fn test_new_show_form_prefills_start_time() {
    let state = setup_test_app_state().await;

    let response = send(
        &state,
        Request::builder()
            .uri("/shows/create")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    let year = Utc::now().format("%Y").to_string();
    assert!(body.contains(&format!("value=\"{}-", year)));
}
