use garde::Validate;
use sea_orm::Set;
use serde::Deserialize;

use super::{
    known_genres, known_state, optional, optional_url, parse_seeking_flag, required, seeking_flag,
    trim_in_place, FormErrors, TRUTHY_TOKEN,
};
use crate::db::entities::{venue, GenreList};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct VenueForm {
    #[garde(custom(required))]
    pub name: String,
    #[garde(custom(required), length(chars, max = 120))]
    pub city: String,
    #[garde(custom(known_state))]
    pub state: String,
    #[garde(custom(required), length(chars, max = 120))]
    pub address: String,
    #[garde(custom(required), length(chars, max = 120))]
    pub phone: String,
    #[garde(custom(known_genres))]
    pub genres: Vec<String>,
    #[garde(custom(optional_url), length(chars, max = 500))]
    pub image_link: String,
    #[garde(custom(optional_url), length(chars, max = 120))]
    pub facebook_link: String,
    #[garde(custom(optional_url), length(chars, max = 120))]
    pub website: String,
    #[garde(custom(seeking_flag))]
    pub seeking_talent: String,
    #[garde(length(chars, max = 500))]
    pub seeking_description: String,
}

impl VenueForm {
    /// Prefills the edit form from a stored venue.
    pub fn from_model(venue: &venue::Model) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            genres: venue.genres.0.clone(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            website: venue.website.clone().unwrap_or_default(),
            seeking_talent: if venue.seeking_talent {
                TRUTHY_TOKEN.to_string()
            } else {
                String::new()
            },
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn trimmed(mut self) -> Self {
        for field in [
            &mut self.name,
            &mut self.city,
            &mut self.state,
            &mut self.address,
            &mut self.phone,
            &mut self.image_link,
            &mut self.facebook_link,
            &mut self.website,
            &mut self.seeking_talent,
            &mut self.seeking_description,
        ] {
            trim_in_place(field);
        }
        self.genres.iter_mut().for_each(trim_in_place);
        self
    }

    /// Validates the (already trimmed) form and builds an active model with
    /// every mutable column set. The id is left for the repository to fill.
    pub fn to_active_model(&self) -> Result<venue::ActiveModel, FormErrors> {
        self.validate()?;

        Ok(venue::ActiveModel {
            name: Set(self.name.clone()),
            city: Set(self.city.clone()),
            state: Set(self.state.clone()),
            address: Set(self.address.clone()),
            phone: Set(self.phone.clone()),
            genres: Set(GenreList(self.genres.clone())),
            image_link: Set(optional(&self.image_link)),
            facebook_link: Set(optional(&self.facebook_link)),
            website: Set(optional(&self.website)),
            seeking_talent: Set(parse_seeking_flag(&self.seeking_talent) == Some(true)),
            seeking_description: Set(optional(&self.seeking_description)),
            ..Default::default()
        })
    }
}
