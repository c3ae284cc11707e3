//! Show partitioning and the detail views built on it.
//!
//! A venue or artist page lists the entity's shows split around "now", each
//! show carrying the display fields of the other side of the association.
//! `now` is always passed in so the split is deterministic.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::{
    db::{
        entities::{artist, venue},
        repositories::{ArtistRepository, ShowRepository, VenueRepository},
    },
    error::Result,
};

/// Anything with a start time can be partitioned.
pub trait Scheduled {
    fn start_time(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTiming {
    Upcoming,
    Past,
    /// Starts exactly at `now`; belongs to neither bucket.
    Now,
}

impl ShowTiming {
    pub fn classify(start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        match start.cmp(&now) {
            std::cmp::Ordering::Greater => Self::Upcoming,
            std::cmp::Ordering::Less => Self::Past,
            std::cmp::Ordering::Equal => Self::Now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowBuckets<T> {
    pub upcoming_shows: Vec<T>,
    pub past_shows: Vec<T>,
    pub upcoming_shows_count: usize,
    pub past_shows_count: usize,
}

/// A show as seen from its venue's page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueShow {
    pub show_id: i32,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// A show as seen from its artist's page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistShow {
    pub show_id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// A row of the `/shows` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListing {
    pub show_id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueDetail {
    pub venue: venue::Model,
    #[serde(flatten)]
    pub shows: ShowBuckets<VenueShow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistDetail {
    pub artist: artist::Model,
    #[serde(flatten)]
    pub shows: ShowBuckets<ArtistShow>,
}

/// Splits shows around `now`: strictly later is upcoming (soonest first),
/// strictly earlier is past (most recent first). A show at exactly `now` is
/// dropped from both lists.
pub fn partition_shows<T: Scheduled>(shows: Vec<T>, now: DateTime<Utc>) -> ShowBuckets<T> {
    let mut upcoming_shows = Vec::new();
    let mut past_shows = Vec::new();
    for show in shows {
        match ShowTiming::classify(show.start_time(), now) {
            ShowTiming::Upcoming => upcoming_shows.push(show),
            ShowTiming::Past => past_shows.push(show),
            ShowTiming::Now => {}
        }
    }

    upcoming_shows.sort_by_key(|s| s.start_time());
    past_shows.sort_by_key(|s| std::cmp::Reverse(s.start_time()));

    ShowBuckets {
        upcoming_shows_count: upcoming_shows.len(),
        past_shows_count: past_shows.len(),
        upcoming_shows,
        past_shows,
    }
}

/// Upcoming show count per owner id, from `(owner_id, start_time)` pairs.
pub fn upcoming_counts(
    schedule: Vec<(i32, DateTime<Utc>)>,
    now: DateTime<Utc>,
) -> HashMap<i32, usize> {
    let mut counts = HashMap::new();
    for (id, start) in schedule {
        if ShowTiming::classify(start, now) == ShowTiming::Upcoming {
            *counts.entry(id).or_insert(0) += 1;
        }
    }
    counts
}

pub async fn venue_detail(
    db: &DatabaseConnection,
    venue_id: i32,
    now: DateTime<Utc>,
) -> Result<VenueDetail> {
    let venue = VenueRepository::new(db.clone()).get(venue_id).await?;
    let shows = ShowRepository::new(db.clone())
        .find_for_venue(venue_id)
        .await?
        .into_iter()
        .map(|(show, artist)| VenueShow {
            show_id: show.id,
            artist_id: artist.id,
            artist_name: artist.name,
            artist_image_link: artist.image_link,
            start_time: show.start_time.with_timezone(&Utc),
        })
        .collect();

    Ok(VenueDetail {
        venue,
        shows: partition_shows(shows, now),
    })
}

pub async fn artist_detail(
    db: &DatabaseConnection,
    artist_id: i32,
    now: DateTime<Utc>,
) -> Result<ArtistDetail> {
    let artist = ArtistRepository::new(db.clone()).get(artist_id).await?;
    let shows = ShowRepository::new(db.clone())
        .find_for_artist(artist_id)
        .await?
        .into_iter()
        .map(|(show, venue)| ArtistShow {
            show_id: show.id,
            venue_id: venue.id,
            venue_name: venue.name,
            venue_image_link: venue.image_link,
            start_time: show.start_time.with_timezone(&Utc),
        })
        .collect();

    Ok(ArtistDetail {
        artist,
        shows: partition_shows(shows, now),
    })
}

/// Every show, soonest first; ties go to the lower id.
pub async fn all_shows(db: &DatabaseConnection) -> Result<Vec<ShowListing>> {
    let mut listings: Vec<ShowListing> = ShowRepository::new(db.clone())
        .find_all_with_parties()
        .await?
        .into_iter()
        .map(|(show, artist, venue)| ShowListing {
            show_id: show.id,
            venue_id: venue.id,
            venue_name: venue.name,
            artist_id: artist.id,
            artist_name: artist.name,
            artist_image_link: artist.image_link,
            start_time: show.start_time.with_timezone(&Utc),
        })
        .collect();

    listings.sort_by_key(|s| (s.start_time, s.show_id));
    Ok(listings)
}
