use maud::{html, Markup};

use super::components::{
    field_errors, multi_select_field, select_field, text_field, textarea_field,
};
use super::layout::base_layout;
use crate::db::enums::{Genre, UsState};
use crate::forms::{ArtistForm, FormErrors, ShowForm, VenueForm, TRUTHY_TOKEN};

/// Whether a form creates a record or edits the one with this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i32),
}

impl FormMode {
    fn action(&self, base: &str) -> String {
        match self {
            Self::Create => format!("{}/create", base),
            Self::Edit(id) => format!("{}/{}/edit", base, id),
        }
    }
}

fn state_options() -> Vec<(&'static str, &'static str)> {
    UsState::ALL.iter().map(|s| (s.as_str(), s.as_str())).collect()
}

fn genre_options() -> Vec<&'static str> {
    Genre::ALL.iter().map(Genre::as_str).collect()
}

fn seeking_select(name: &str, label: &str, value: &str, errors: &FormErrors) -> Markup {
    let selected = if value == TRUTHY_TOKEN { TRUTHY_TOKEN } else { "False" };
    select_field(
        name,
        label,
        &[("False", "No"), (TRUTHY_TOKEN, "Yes")],
        selected,
        errors.get(name),
    )
}

fn form_shell(action: &str, heading: &str, submit: &str, fields: Markup) -> Markup {
    html! {
        div class="max-w-2xl mx-auto bg-white rounded-lg shadow-md p-8" {
            h1 class="text-2xl font-bold text-gray-900 mb-6" { (heading) }
            form method="post" action=(action) class="space-y-4" {
                (fields)
                button type="submit" class="w-full px-4 py-2 bg-orange-600 hover:bg-orange-700 text-white font-semibold rounded-md" {
                    (submit)
                }
            }
        }
    }
}

pub fn venue_form_page(mode: FormMode, form: &VenueForm, errors: &FormErrors) -> Markup {
    let (title, heading, submit) = match mode {
        FormMode::Create => ("New Venue", "List a new venue".to_string(), "Create Venue"),
        FormMode::Edit(_) => ("Edit Venue", format!("Edit venue {}", form.name), "Save Venue"),
    };

    base_layout(
        title,
        None,
        form_shell(
            &mode.action("/venues"),
            &heading,
            submit,
            html! {
                (text_field("name", "Name", &form.name, "The Musical Hop", errors.get("name")))
                div class="grid grid-cols-2 gap-4" {
                    (text_field("city", "City", &form.city, "San Francisco", errors.get("city")))
                    (select_field("state", "State", &state_options(), &form.state, errors.get("state")))
                }
                (text_field("address", "Address", &form.address, "1015 Folsom Street", errors.get("address")))
                (text_field("phone", "Phone", &form.phone, "xxx-xxx-xxxx", errors.get("phone")))
                (multi_select_field("genres", "Genres", &genre_options(), &form.genres, errors.get("genres")))
                (text_field("image_link", "Image link", &form.image_link, "https://", errors.get("image_link")))
                (text_field("facebook_link", "Facebook link", &form.facebook_link, "https://www.facebook.com/", errors.get("facebook_link")))
                (text_field("website", "Website", &form.website, "https://", errors.get("website")))
                (seeking_select("seeking_talent", "Looking for talent?", &form.seeking_talent, errors))
                (textarea_field("seeking_description", "Seeking description", &form.seeking_description, errors.get("seeking_description")))
            },
        ),
    )
}

pub fn artist_form_page(mode: FormMode, form: &ArtistForm, errors: &FormErrors) -> Markup {
    let (title, heading, submit) = match mode {
        FormMode::Create => ("New Artist", "List a new artist".to_string(), "Create Artist"),
        FormMode::Edit(_) => ("Edit Artist", format!("Edit artist {}", form.name), "Save Artist"),
    };

    base_layout(
        title,
        None,
        form_shell(
            &mode.action("/artists"),
            &heading,
            submit,
            html! {
                (text_field("name", "Name", &form.name, "Guns N Petals", errors.get("name")))
                div class="grid grid-cols-2 gap-4" {
                    (text_field("city", "City", &form.city, "San Francisco", errors.get("city")))
                    (select_field("state", "State", &state_options(), &form.state, errors.get("state")))
                }
                (text_field("phone", "Phone", &form.phone, "xxx-xxx-xxxx", errors.get("phone")))
                (multi_select_field("genres", "Genres", &genre_options(), &form.genres, errors.get("genres")))
                (text_field("image_link", "Image link", &form.image_link, "https://", errors.get("image_link")))
                (text_field("facebook_link", "Facebook link", &form.facebook_link, "https://www.facebook.com/", errors.get("facebook_link")))
                (text_field("website", "Website", &form.website, "https://", errors.get("website")))
                (seeking_select("seeking_venue", "Looking for venues?", &form.seeking_venue, errors))
                (textarea_field("seeking_description", "Seeking description", &form.seeking_description, errors.get("seeking_description")))
            },
        ),
    )
}

pub fn show_form_page(form: &ShowForm, errors: &FormErrors) -> Markup {
    base_layout(
        "New Show",
        None,
        form_shell(
            "/shows/create",
            "List a new show",
            "Create Show",
            html! {
                (text_field("artist_id", "Artist ID", &form.artist_id, "", errors.get("artist_id")))
                (text_field("venue_id", "Venue ID", &form.venue_id, "", errors.get("venue_id")))
                (text_field("start_time", "Start time", &form.start_time, "YYYY-MM-DD HH:MM:SS", errors.get("start_time")))
                @for field in errors.fields().filter(|f| !matches!(*f, "artist_id" | "venue_id" | "start_time")) {
                    (field_errors(errors.get(field)))
                }
            },
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_form_posts_to_edit_route_and_keeps_values() {
        let form = VenueForm {
            name: "The Dueling Pianos Bar".to_string(),
            state: "NY".to_string(),
            genres: vec!["Classical".to_string()],
            seeking_talent: "True".to_string(),
            ..Default::default()
        };

        let page = venue_form_page(FormMode::Edit(2), &form, &FormErrors::default()).into_string();

        assert!(page.contains("action=\"/venues/2/edit\""));
        assert!(page.contains("value=\"The Dueling Pianos Bar\""));
        assert!(page.contains("<option value=\"NY\" selected>"));
        assert!(page.contains("<option value=\"Classical\" selected>"));
        assert!(page.contains("<option value=\"True\" selected>"));
    }

    #[test]
    fn test_errors_render_next_to_fields() {
        let mut errors = FormErrors::default();
        errors.add("name", "This field is required.");

        let page =
            artist_form_page(FormMode::Create, &ArtistForm::default(), &errors).into_string();

        assert!(page.contains("action=\"/artists/create\""));
        assert!(page.contains("This field is required."));
    }
}
