use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::info;

use crate::db::entities::{artist, show, venue};
use crate::error::{AppError, Result};
use crate::forms::{FormErrors, NewShow};

pub struct VenueRepository {
    db: DatabaseConnection,
}

impl VenueRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<venue::Model>> {
        Ok(venue::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Like `find_by_id`, but a missing row is an error.
    pub async fn get(&self, id: i32) -> Result<venue::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))
    }

    pub async fn find_all(&self) -> Result<Vec<venue::Model>> {
        Ok(venue::Entity::find()
            .order_by_asc(venue::Column::Name)
            .all(&self.db)
            .await?)
    }

    /// `(id, name)` pairs ordered by name.
    pub async fn find_names(&self) -> Result<Vec<(i32, String)>> {
        Ok(venue::Entity::find()
            .select_only()
            .column(venue::Column::Id)
            .column(venue::Column::Name)
            .order_by_asc(venue::Column::Name)
            .into_tuple()
            .all(&self.db)
            .await?)
    }

    pub async fn create(&self, venue: venue::ActiveModel) -> Result<venue::Model> {
        let txn = self.db.begin().await?;
        let created = venue.insert(&txn).await?;
        txn.commit().await?;

        info!("Created venue {} ({})", created.id, created.name);
        Ok(created)
    }

    /// Overwrites every mutable column of an existing venue.
    pub async fn update(&self, id: i32, mut changes: venue::ActiveModel) -> Result<venue::Model> {
        let txn = self.db.begin().await?;
        if venue::Entity::find_by_id(id).one(&txn).await?.is_none() {
            return Err(AppError::NotFound(format!("Venue {} not found", id)));
        }

        changes.id = Set(id);
        let updated = changes.update(&txn).await?;
        txn.commit().await?;

        info!("Updated venue {} ({})", updated.id, updated.name);
        Ok(updated)
    }

    /// Deletes the venue together with its shows.
    pub async fn delete(&self, id: i32) -> Result<venue::Model> {
        let txn = self.db.begin().await?;
        let existing = venue::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))?;

        let removed_shows = show::Entity::delete_many()
            .filter(show::Column::VenueId.eq(id))
            .exec(&txn)
            .await?
            .rows_affected;
        existing.clone().delete(&txn).await?;
        txn.commit().await?;

        info!(
            "Deleted venue {} ({}) and {} show(s)",
            existing.id, existing.name, removed_shows
        );
        Ok(existing)
    }
}

pub struct ArtistRepository {
    db: DatabaseConnection,
}

impl ArtistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<artist::Model>> {
        Ok(artist::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> Result<artist::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", id)))
    }

    pub async fn find_names(&self) -> Result<Vec<(i32, String)>> {
        Ok(artist::Entity::find()
            .select_only()
            .column(artist::Column::Id)
            .column(artist::Column::Name)
            .order_by_asc(artist::Column::Name)
            .into_tuple()
            .all(&self.db)
            .await?)
    }

    pub async fn create(&self, artist: artist::ActiveModel) -> Result<artist::Model> {
        let txn = self.db.begin().await?;
        let created = artist.insert(&txn).await?;
        txn.commit().await?;

        info!("Created artist {} ({})", created.id, created.name);
        Ok(created)
    }

    /// Overwrites every mutable column of an existing artist.
    pub async fn update(
        &self,
        id: i32,
        mut changes: artist::ActiveModel,
    ) -> Result<artist::Model> {
        let txn = self.db.begin().await?;
        if artist::Entity::find_by_id(id).one(&txn).await?.is_none() {
            return Err(AppError::NotFound(format!("Artist {} not found", id)));
        }

        changes.id = Set(id);
        let updated = changes.update(&txn).await?;
        txn.commit().await?;

        info!("Updated artist {} ({})", updated.id, updated.name);
        Ok(updated)
    }
}

pub struct ShowRepository {
    db: DatabaseConnection,
}

impl ShowRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a show after checking that both ends of the association exist.
    ///
    /// A dangling artist or venue id is reported as a form error on the
    /// offending field, and nothing is written.
    pub async fn create(&self, new_show: NewShow) -> Result<show::Model> {
        let txn = self.db.begin().await?;

        let mut errors = FormErrors::default();
        if artist::Entity::find_by_id(new_show.artist_id)
            .one(&txn)
            .await?
            .is_none()
        {
            errors.add("artist_id", format!("No artist with id {}", new_show.artist_id));
        }
        if venue::Entity::find_by_id(new_show.venue_id)
            .one(&txn)
            .await?
            .is_none()
        {
            errors.add("venue_id", format!("No venue with id {}", new_show.venue_id));
        }
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let created = show::ActiveModel {
            artist_id: Set(new_show.artist_id),
            venue_id: Set(new_show.venue_id),
            start_time: Set(new_show.start_time.fixed_offset()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        txn.commit().await?;

        info!(
            "Created show {} (artist {}, venue {})",
            created.id, created.artist_id, created.venue_id
        );
        Ok(created)
    }

    /// Every show joined with its artist and venue, ordered by start time.
    pub async fn find_all_with_parties(
        &self,
    ) -> Result<Vec<(show::Model, artist::Model, venue::Model)>> {
        let rows = show::Entity::find()
            .order_by_asc(show::Column::StartTime)
            .find_also_related(artist::Entity)
            .all(&self.db)
            .await?;

        let venues: HashMap<i32, venue::Model> = venue::Entity::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(|v| (v.id, v))
            .collect();

        let mut joined = Vec::with_capacity(rows.len());
        for (show, artist) in rows {
            let venue = venues.get(&show.venue_id).cloned();
            match (artist, venue) {
                (Some(artist), Some(venue)) => joined.push((show, artist, venue)),
                _ => {
                    return Err(AppError::Database(DbErr::RecordNotFound(format!(
                        "Show {} references a missing artist or venue",
                        show.id
                    ))))
                }
            }
        }
        Ok(joined)
    }

    /// Shows of one venue paired with the performing artist.
    pub async fn find_for_venue(&self, venue_id: i32) -> Result<Vec<(show::Model, artist::Model)>> {
        let rows = show::Entity::find()
            .filter(show::Column::VenueId.eq(venue_id))
            .find_also_related(artist::Entity)
            .all(&self.db)
            .await?;

        rows.into_iter()
            .map(|(show, artist)| match artist {
                Some(artist) => Ok((show, artist)),
                None => Err(AppError::Database(DbErr::RecordNotFound(format!(
                    "Show {} references missing artist {}",
                    show.id, show.artist_id
                )))),
            })
            .collect()
    }

    /// Shows of one artist paired with the hosting venue.
    pub async fn find_for_artist(&self, artist_id: i32) -> Result<Vec<(show::Model, venue::Model)>> {
        let rows = show::Entity::find()
            .filter(show::Column::ArtistId.eq(artist_id))
            .find_also_related(venue::Entity)
            .all(&self.db)
            .await?;

        rows.into_iter()
            .map(|(show, venue)| match venue {
                Some(venue) => Ok((show, venue)),
                None => Err(AppError::Database(DbErr::RecordNotFound(format!(
                    "Show {} references missing venue {}",
                    show.id, show.venue_id
                )))),
            })
            .collect()
    }

    /// `(venue_id, start_time)` for every show.
    pub async fn venue_schedule(&self) -> Result<Vec<(i32, DateTime<Utc>)>> {
        self.schedule_by(show::Column::VenueId).await
    }

    /// `(artist_id, start_time)` for every show.
    pub async fn artist_schedule(&self) -> Result<Vec<(i32, DateTime<Utc>)>> {
        self.schedule_by(show::Column::ArtistId).await
    }

    // No id filter: backends cap bind parameters per statement.
    async fn schedule_by(&self, owner: show::Column) -> Result<Vec<(i32, DateTime<Utc>)>> {
        let rows: Vec<(i32, DateTimeWithTimeZone)> = show::Entity::find()
            .select_only()
            .column(owner)
            .column(show::Column::StartTime)
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, start)| (id, start.with_timezone(&Utc)))
            .collect())
    }
}
