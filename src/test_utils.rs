//! Test utilities for Gigbook
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - AppState factories
//! - Venue, artist, and show factories

use chrono::{DateTime, Utc};
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};

use crate::{
    config::{Config, LogFormat},
    db::entities::{artist, show, venue, GenreList},
    state::AppState,
};

/// Setup an in-memory SQLite database with all migrations applied
///
/// The pool holds a single connection: every connection to `sqlite::memory:`
/// opens its own empty database.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to create in-memory database");

    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test configuration with sensible defaults
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 3000,
        static_dir: "static".to_string(),
        log_format: LogFormat::Pretty,
    }
}

/// Create a complete test AppState with an isolated database
pub async fn setup_test_app_state() -> AppState {
    AppState::new(setup_test_db().await, test_config())
}

// ============================================================================
// Test Data Factories
// ============================================================================

pub async fn create_test_venue(
    db: &DatabaseConnection,
    name: &str,
    city: &str,
    state: &str,
) -> venue::Model {
    venue::ActiveModel {
        name: Set(name.to_string()),
        city: Set(city.to_string()),
        state: Set(state.to_string()),
        address: Set("1015 Folsom Street".to_string()),
        phone: Set("123-123-1234".to_string()),
        genres: Set(GenreList(vec!["Jazz".to_string()])),
        image_link: Set(None),
        facebook_link: Set(None),
        website: Set(None),
        seeking_talent: Set(false),
        seeking_description: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test venue")
}

pub async fn create_test_artist(db: &DatabaseConnection, name: &str) -> artist::Model {
    artist::ActiveModel {
        name: Set(name.to_string()),
        city: Set("San Francisco".to_string()),
        state: Set("CA".to_string()),
        phone: Set("326-123-5000".to_string()),
        genres: Set(GenreList(vec!["Rock n Roll".to_string()])),
        image_link: Set(Some("https://images.example.com/artist.jpg".to_string())),
        facebook_link: Set(None),
        website: Set(None),
        seeking_venue: Set(false),
        seeking_description: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test artist")
}

pub async fn create_test_show(
    db: &DatabaseConnection,
    artist_id: i32,
    venue_id: i32,
    start_time: DateTime<Utc>,
) -> show::Model {
    show::ActiveModel {
        artist_id: Set(artist_id),
        venue_id: Set(venue_id),
        start_time: Set(start_time.fixed_offset()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test show")
}
