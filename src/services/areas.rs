//! The `/venues` listing: venues grouped by (city, state).

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serde::Serialize;

use super::shows::upcoming_counts;
use crate::{
    db::{
        entities::venue,
        repositories::{ShowRepository, VenueRepository},
    },
    error::Result,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Groups by the exact (city, state) pair, so same-named cities in different
/// states stay apart. Areas come out sorted by city then state; venues keep
/// their input order.
pub fn group_by_area(venues: Vec<venue::Model>, counts: &HashMap<i32, usize>) -> Vec<Area> {
    let mut grouped: BTreeMap<(String, String), Vec<VenueSummary>> = BTreeMap::new();
    for venue in venues {
        grouped
            .entry((venue.city, venue.state))
            .or_default()
            .push(VenueSummary {
                num_upcoming_shows: counts.get(&venue.id).copied().unwrap_or(0),
                id: venue.id,
                name: venue.name,
            });
    }

    grouped
        .into_iter()
        .map(|((city, state), venues)| Area {
            city,
            state,
            venues,
        })
        .collect()
}

pub async fn venue_areas(db: &DatabaseConnection, now: DateTime<Utc>) -> Result<Vec<Area>> {
    let venues = VenueRepository::new(db.clone()).find_all().await?;
    let schedule = ShowRepository::new(db.clone()).venue_schedule().await?;

    Ok(group_by_area(venues, &upcoming_counts(schedule, now)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::entities::GenreList;
    use pretty_assertions::assert_eq;

    fn venue(id: i32, name: &str, city: &str, state: &str) -> venue::Model {
        venue::Model {
            id,
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: "1 Main St".to_string(),
            phone: "555-0100".to_string(),
            genres: GenreList(vec!["Jazz".to_string()]),
            image_link: None,
            facebook_link: None,
            website: None,
            seeking_talent: false,
            seeking_description: None,
        }
    }

    #[test]
    fn test_groups_by_city_and_state_pair() {
        let venues = vec![
            venue(1, "The Musical Hop", "San Francisco", "CA"),
            venue(2, "Portland Hall", "Portland", "OR"),
            venue(3, "Park Square", "San Francisco", "CA"),
            venue(4, "Harbor Stage", "Portland", "ME"),
        ];
        let counts = HashMap::from([(1, 2), (4, 1)]);

        let areas = group_by_area(venues, &counts);

        let keys: Vec<(&str, &str)> = areas
            .iter()
            .map(|a| (a.city.as_str(), a.state.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![("Portland", "ME"), ("Portland", "OR"), ("San Francisco", "CA")]
        );
        assert_eq!(areas[2].venues.len(), 2);
        assert_eq!(areas[2].venues[0].num_upcoming_shows, 2);
        assert_eq!(areas[2].venues[1].num_upcoming_shows, 0);
        assert_eq!(areas[0].venues[0].name, "Harbor Stage");
    }

    #[test]
    fn test_no_venues_no_areas() {
        assert!(group_by_area(vec![], &HashMap::new()).is_empty());
    }
}
