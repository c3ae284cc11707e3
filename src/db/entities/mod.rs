pub mod artist;
pub mod show;
pub mod venue;

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

pub use artist::Entity as Artist;
pub use show::Entity as Show;
pub use venue::Entity as Venue;

/// Genre tags, stored as a JSON array so the column is portable across backends.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct GenreList(pub Vec<String>);

impl GenreList {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
