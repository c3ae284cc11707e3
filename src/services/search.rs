//! Case-insensitive substring search over names.
//!
//! No ranking, tokenization, or pagination: a hit is any name containing the
//! trimmed term, compared after lowercasing both sides. An empty term matches
//! everything.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serde::Serialize;

use super::shows::upcoming_counts;
use crate::{
    db::repositories::{ArtistRepository, ShowRepository, VenueRepository},
    error::Result,
};

pub trait Named {
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

impl Named for (i32, String) {
    fn name(&self) -> &str {
        &self.1
    }
}

/// Keeps the items whose name contains `term`, ignoring case. Order is kept.
pub fn filter_by_name<T: Named>(term: &str, items: Vec<T>) -> SearchResults<T> {
    let needle = term.trim().to_lowercase();
    let data: Vec<T> = items
        .into_iter()
        .filter(|item| item.name().to_lowercase().contains(&needle))
        .collect();

    SearchResults {
        count: data.len(),
        data,
    }
}

pub async fn search_venues(
    db: &DatabaseConnection,
    term: &str,
    now: DateTime<Utc>,
) -> Result<SearchResults<SearchHit>> {
    let matches = filter_by_name(term, VenueRepository::new(db.clone()).find_names().await?);
    let schedule = ShowRepository::new(db.clone()).venue_schedule().await?;

    Ok(attach_counts(matches, upcoming_counts(schedule, now)))
}

pub async fn search_artists(
    db: &DatabaseConnection,
    term: &str,
    now: DateTime<Utc>,
) -> Result<SearchResults<SearchHit>> {
    let matches = filter_by_name(term, ArtistRepository::new(db.clone()).find_names().await?);
    let schedule = ShowRepository::new(db.clone()).artist_schedule().await?;

    Ok(attach_counts(matches, upcoming_counts(schedule, now)))
}

fn attach_counts(
    matches: SearchResults<(i32, String)>,
    counts: std::collections::HashMap<i32, usize>,
) -> SearchResults<SearchHit> {
    SearchResults {
        count: matches.count,
        data: matches
            .data
            .into_iter()
            .map(|(id, name)| SearchHit {
                num_upcoming_shows: counts.get(&id).copied().unwrap_or(0),
                id,
                name,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(items: &[&str]) -> Vec<(i32, String)> {
        items
            .iter()
            .enumerate()
            .map(|(i, n)| (i as i32 + 1, n.to_string()))
            .collect()
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let results = filter_by_name("tony", names(&["Tonya's Bar", "Sandra's", "The TONY Awards"]));

        assert_eq!(results.count, 2);
        assert_eq!(
            results.data,
            vec![(1, "Tonya's Bar".to_string()), (3, "The TONY Awards".to_string())]
        );
    }

    #[test]
    fn test_search_term_is_trimmed() {
        let results = filter_by_name("  hop ", names(&["The Musical Hop", "Park Square"]));
        assert_eq!(results.count, 1);
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let results = filter_by_name("", names(&["A", "B", "C"]));
        assert_eq!(results.count, 3);
    }

    #[test]
    fn test_wildcard_characters_are_literal() {
        let results = filter_by_name("%", names(&["100% Jazz", "Blues Hall"]));
        assert_eq!(results.count, 1);
        assert_eq!(results.data[0].1, "100% Jazz");
    }

    #[test]
    fn test_no_match() {
        let results = filter_by_name("zzz", names(&["Tonya's Bar"]));
        assert_eq!(results.count, 0);
        assert!(results.data.is_empty());
    }
}
