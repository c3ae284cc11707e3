use garde::Validate;
use sea_orm::Set;
use serde::Deserialize;

use super::{
    known_genres, known_state, optional, optional_url, parse_seeking_flag, required, seeking_flag,
    trim_in_place, FormErrors, TRUTHY_TOKEN,
};
use crate::db::entities::{artist, GenreList};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ArtistForm {
    #[garde(custom(required))]
    pub name: String,
    #[garde(custom(required), length(chars, max = 120))]
    pub city: String,
    #[garde(custom(known_state))]
    pub state: String,
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
    pub seeking_venue: String,
    #[garde(length(chars, max = 500))]
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn from_model(artist: &artist::Model) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            genres: artist.genres.0.clone(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            website: artist.website.clone().unwrap_or_default(),
            seeking_venue: if artist.seeking_venue {
                TRUTHY_TOKEN.to_string()
            } else {
                String::new()
            },
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn trimmed(mut self) -> Self {
        for field in [
            &mut self.name,
            &mut self.city,
            &mut self.state,
            &mut self.phone,
            &mut self.image_link,
            &mut self.facebook_link,
            &mut self.website,
            &mut self.seeking_venue,
            &mut self.seeking_description,
        ] {
            trim_in_place(field);
        }
        self.genres.iter_mut().for_each(trim_in_place);
        self
    }

    pub fn to_active_model(&self) -> Result<artist::ActiveModel, FormErrors> {
        self.validate()?;

        Ok(artist::ActiveModel {
            name: Set(self.name.clone()),
            city: Set(self.city.clone()),
            state: Set(self.state.clone()),
            phone: Set(self.phone.clone()),
            genres: Set(GenreList(self.genres.clone())),
            image_link: Set(optional(&self.image_link)),
            facebook_link: Set(optional(&self.facebook_link)),
            website: Set(optional(&self.website)),
            seeking_venue: Set(parse_seeking_flag(&self.seeking_venue) == Some(true)),
            seeking_description: Set(optional(&self.seeking_description)),
            ..Default::default()
        })
    }
}
