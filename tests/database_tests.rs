//! Database integration tests
//!
//! Exercises the repositories and services against a migrated SQLite database:
//! - Venue and artist writes round-trip every column
//! - Show inserts check both ends of the association
//! - Venue deletes take their shows with them
//! - Detail views, search, and areas read back what was written

use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, Set};

use gigbook::db::entities::{artist, show, venue, GenreList};
use gigbook::db::repositories::{ArtistRepository, ShowRepository, VenueRepository};
use gigbook::error::AppError;
use gigbook::forms::NewShow;
use gigbook::services;
use gigbook::test_utils::*;

#[tokio::test]
async fn test_create_venue_round_trips_every_column() {
    let db = setup_test_db().await;
    let repo = VenueRepository::new(db.clone());

    let created = repo
        .create(venue::ActiveModel {
            name: Set("The Dueling Pianos Bar".to_string()),
            city: Set("New York".to_string()),
            state: Set("NY".to_string()),
            address: Set("335 Delancey Street".to_string()),
            phone: Set("914-003-1132".to_string()),
            genres: Set(GenreList(vec!["Classical".to_string(), "R&B".to_string()])),
            image_link: Set(Some("https://images.example.com/pianos.jpg".to_string())),
            facebook_link: Set(None),
            website: Set(Some("https://www.theduelingpianos.com".to_string())),
            seeking_talent: Set(true),
            seeking_description: Set(Some("Looking for pianists".to_string())),
            ..Default::default()
        })
        .await
        .unwrap();

    let fetched = repo.get(created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(
        fetched.genres,
        GenreList(vec!["Classical".to_string(), "R&B".to_string()])
    );
}

#[tokio::test]
async fn test_get_missing_venue_is_not_found() {
    let db = setup_test_db().await;

    let err = VenueRepository::new(db).get(42).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_update_missing_artist_is_not_found() {
    let db = setup_test_db().await;

    let err = ArtistRepository::new(db)
        .update(
            7,
            artist::ActiveModel {
                name: Set("Nobody".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_show_requires_existing_artist_and_venue() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;

    let err = ShowRepository::new(db.clone())
        .create(NewShow {
            artist_id: 99,
            venue_id: venue.id,
            start_time: Utc::now(),
        })
        .await
        .unwrap_err();

    match err {
        AppError::Validation(errors) => {
            assert!(errors.has("artist_id"));
            assert!(!errors.has("venue_id"));
        }
        other => panic!("expected a validation error, got {:?}", other),
    }
    assert_eq!(show::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_venue_removes_its_shows_only() {
    let db = setup_test_db().await;
    let doomed = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let kept = create_test_venue(&db, "Park Square", "San Francisco", "CA").await;
    let artist = create_test_artist(&db, "Guns N Petals").await;
    create_test_show(&db, artist.id, doomed.id, Utc::now() + Duration::days(3)).await;
    create_test_show(&db, artist.id, doomed.id, Utc::now() - Duration::days(3)).await;
    let survivor = create_test_show(&db, artist.id, kept.id, Utc::now()).await;

    let deleted = VenueRepository::new(db.clone()).delete(doomed.id).await.unwrap();
    assert_eq!(deleted.name, "The Musical Hop");

    let remaining: Vec<i32> = show::Entity::find()
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(remaining, vec![survivor.id]);
    assert!(venue::Entity::find_by_id(doomed.id)
        .one(&db)
        .await
        .unwrap()
        .is_none());
    assert!(artist::Entity::find_by_id(artist.id)
        .one(&db)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_venue_detail_partitions_and_denormalizes() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let petals = create_test_artist(&db, "Guns N Petals").await;
    let quevedo = create_test_artist(&db, "Matt Quevedo").await;
    let now = Utc::now();

    let upcoming = create_test_show(&db, quevedo.id, venue.id, now + Duration::days(10)).await;
    let soonest = create_test_show(&db, petals.id, venue.id, now + Duration::days(1)).await;
    let past = create_test_show(&db, petals.id, venue.id, now - Duration::days(30)).await;

    let detail = services::venue_detail(&db, venue.id, now).await.unwrap();

    assert_eq!(detail.venue, venue);
    let upcoming_ids: Vec<i32> = detail
        .shows
        .upcoming_shows
        .iter()
        .map(|s| s.show_id)
        .collect();
    assert_eq!(upcoming_ids, vec![soonest.id, upcoming.id]);
    assert_eq!(detail.shows.upcoming_shows_count, 2);
    assert_eq!(detail.shows.past_shows_count, 1);
    assert_eq!(detail.shows.past_shows[0].show_id, past.id);
    assert_eq!(detail.shows.upcoming_shows[1].artist_name, "Matt Quevedo");
    assert_eq!(
        detail.shows.upcoming_shows[0].artist_image_link,
        petals.image_link
    );
}

#[tokio::test]
async fn test_artist_detail_for_missing_artist_is_not_found() {
    let db = setup_test_db().await;

    let err = services::artist_detail(&db, 3, Utc::now()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_artist_detail_names_the_venue() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "Park Square Live Music", "San Francisco", "CA").await;
    let artist = create_test_artist(&db, "The Wild Sax Band").await;
    create_test_show(&db, artist.id, venue.id, Utc::now() - Duration::days(1)).await;

    let detail = services::artist_detail(&db, artist.id, Utc::now()).await.unwrap();

    assert_eq!(detail.shows.upcoming_shows_count, 0);
    assert_eq!(detail.shows.past_shows_count, 1);
    assert_eq!(detail.shows.past_shows[0].venue_name, "Park Square Live Music");
    assert_eq!(detail.shows.past_shows[0].venue_id, venue.id);
}

#[tokio::test]
async fn test_search_counts_upcoming_shows() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "Blues Hall", "Austin", "TX").await;
    let tonya = create_test_artist(&db, "Tonya's Bar").await;
    create_test_artist(&db, "Sandra's").await;
    create_test_show(&db, tonya.id, venue.id, Utc::now() + Duration::days(2)).await;
    create_test_show(&db, tonya.id, venue.id, Utc::now() - Duration::days(2)).await;

    let results = services::search_artists(&db, "TONY", Utc::now()).await.unwrap();

    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].name, "Tonya's Bar");
    assert_eq!(results.data[0].num_upcoming_shows, 1);
}

#[tokio::test]
async fn test_venue_areas_split_same_city_by_state() {
    let db = setup_test_db().await;
    create_test_venue(&db, "Rose Room", "Portland", "OR").await;
    create_test_venue(&db, "Harbor Stage", "Portland", "ME").await;
    create_test_venue(&db, "Alberta Hall", "Portland", "OR").await;

    let areas = services::venue_areas(&db, Utc::now()).await.unwrap();

    assert_eq!(areas.len(), 2);
    assert_eq!((areas[0].city.as_str(), areas[0].state.as_str()), ("Portland", "ME"));
    let oregon: Vec<&str> = areas[1].venues.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(oregon, vec!["Alberta Hall", "Rose Room"]);
}

#[tokio::test]
async fn test_venue_schedule_covers_every_venue() {
    let db = setup_test_db().await;
    let hop = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let park = create_test_venue(&db, "Park Square Live", "San Francisco", "CA").await;
    let artist = create_test_artist(&db, "Guns N Petals").await;
    create_test_show(&db, artist.id, hop.id, Utc::now() + Duration::days(1)).await;
    create_test_show(&db, artist.id, park.id, Utc::now() - Duration::days(1)).await;

    let mut owners: Vec<i32> = ShowRepository::new(db.clone())
        .venue_schedule()
        .await
        .unwrap()
        .into_iter()
        .map(|(venue_id, _)| venue_id)
        .collect();
    owners.sort();

    assert_eq!(owners, vec![hop.id, park.id]);
}

#[tokio::test]
async fn test_listing_more_venues_than_bind_parameters() {
    let db = setup_test_db().await;
    db.execute_unprepared(
        "WITH RECURSIVE seq(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM seq WHERE n < 40000) \
         INSERT INTO venues (name, city, state, address, phone, genres, seeking_talent) \
         SELECT 'Venue ' || n, 'Austin', 'TX', '1 Main St', '555-0100', '[\"Jazz\"]', 0 FROM seq",
    )
    .await
    .unwrap();
    let venue = create_test_venue(&db, "Blues Hall", "Austin", "TX").await;
    let artist = create_test_artist(&db, "Guns N Petals").await;
    create_test_show(&db, artist.id, venue.id, Utc::now() + Duration::days(3)).await;

    let areas = services::venue_areas(&db, Utc::now()).await.unwrap();
    assert_eq!(areas.len(), 1);
    assert_eq!(areas[0].venues.len(), 40_001);
    let blues = areas[0]
        .venues
        .iter()
        .find(|v| v.id == venue.id)
        .unwrap();
    assert_eq!(blues.num_upcoming_shows, 1);

    let results = services::search_venues(&db, "", Utc::now()).await.unwrap();
    assert_eq!(results.count, 40_001);
}

#[tokio::test]
async fn test_all_shows_sorted_by_start_time() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&db, "Guns N Petals").await;
    let later = create_test_show(&db, artist.id, venue.id, Utc::now() + Duration::days(5)).await;
    let earlier = create_test_show(&db, artist.id, venue.id, Utc::now() - Duration::days(5)).await;

    let shows = services::all_shows(&db).await.unwrap();

    let ids: Vec<i32> = shows.iter().map(|s| s.show_id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);
    assert_eq!(shows[0].venue_name, "The Musical Hop");
    assert_eq!(shows[0].artist_name, "Guns N Petals");
}
