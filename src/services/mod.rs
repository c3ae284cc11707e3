pub mod areas;
pub mod search;
pub mod shows;

pub use areas::{group_by_area, venue_areas, Area, VenueSummary};
pub use search::{filter_by_name, search_artists, search_venues, Named, SearchHit, SearchResults};
pub use shows::{
    all_shows, artist_detail, partition_shows, venue_detail, ArtistDetail, ArtistShow, ShowBuckets,
    ShowListing, VenueDetail, VenueShow,
};
