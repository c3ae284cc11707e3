use maud::{html, Markup};

use super::format::{format_datetime, DateFormat};
use crate::services::{ArtistShow, ShowListing, VenueShow};

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x300/1a1a1a/ffffff?text=No+Image";

pub fn genre_tags<'a>(genres: impl Iterator<Item = &'a str>) -> Markup {
    html! {
        div class="flex flex-wrap gap-2" {
            @for genre in genres {
                span class="genre px-2 py-1 bg-gray-100 text-gray-700 text-sm rounded" { (genre) }
            }
        }
    }
}

/// One linked name with its upcoming show count.
pub fn summary_row(href: &str, name: &str, num_upcoming_shows: usize) -> Markup {
    html! {
        li class="py-2 flex justify-between items-center" {
            a href=(href) class="text-gray-900 font-medium hover:underline" { (name) }
            span class="text-xs text-gray-500" {
                (num_upcoming_shows) " upcoming show" @if num_upcoming_shows != 1 { "s" }
            }
        }
    }
}

pub fn search_box(action: &str, placeholder: &str, term: &str) -> Markup {
    html! {
        form method="post" action=(action) class="flex gap-2 mb-6" {
            input
                type="search"
                name="search_term"
                value=(term)
                placeholder=(placeholder)
                class="flex-grow px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2";
            button type="submit" class="px-4 py-2 bg-orange-600 hover:bg-orange-700 text-white font-semibold rounded-md" {
                "Search"
            }
        }
    }
}

fn show_card(
    href: &str,
    image: Option<&str>,
    name: &str,
    start_time: &chrono::DateTime<chrono::Utc>,
) -> Markup {
    html! {
        div class="card show bg-white rounded-lg shadow-md overflow-hidden" {
            img
                src=(image.unwrap_or(PLACEHOLDER_IMAGE))
                alt=(name)
                class="w-full h-40 object-cover"
                loading="lazy";
            div class="p-4" {
                a href=(href) class="font-semibold text-gray-900 hover:underline" { (name) }
                p class="text-sm text-gray-600 mt-1" {
                    (format_datetime(start_time, DateFormat::Full))
                }
            }
        }
    }
}

pub fn venue_show_card(show: &VenueShow) -> Markup {
    show_card(
        &format!("/artists/{}", show.artist_id),
        show.artist_image_link.as_deref(),
        &show.artist_name,
        &show.start_time,
    )
}

pub fn artist_show_card(show: &ArtistShow) -> Markup {
    show_card(
        &format!("/venues/{}", show.venue_id),
        show.venue_image_link.as_deref(),
        &show.venue_name,
        &show.start_time,
    )
}

pub fn show_listing_card(show: &ShowListing) -> Markup {
    html! {
        div class="card show bg-white rounded-lg shadow-md overflow-hidden" {
            img
                src=(show.artist_image_link.as_deref().unwrap_or(PLACEHOLDER_IMAGE))
                alt=(show.artist_name)
                class="w-full h-40 object-cover"
                loading="lazy";
            div class="p-4 space-y-1" {
                p class="text-sm text-gray-600" {
                    (format_datetime(&show.start_time, DateFormat::Medium))
                }
                a href=(format!("/artists/{}", show.artist_id)) class="block font-semibold text-gray-900 hover:underline" {
                    (show.artist_name)
                }
                p class="text-sm text-gray-600" {
                    "playing at "
                    a href=(format!("/venues/{}", show.venue_id)) class="hover:underline" {
                        (show.venue_name)
                    }
                }
            }
        }
    }
}

/// Upcoming and past sections of a detail page.
pub fn show_sections<T>(
    upcoming: &[T],
    upcoming_count: usize,
    past: &[T],
    past_count: usize,
    card: impl Fn(&T) -> Markup,
) -> Markup {
    html! {
        section id="upcoming-shows" class="mt-8" {
            h2 class="text-xl font-semibold mb-4" {
                (upcoming_count) " Upcoming " (if upcoming_count == 1 { "Show" } else { "Shows" })
            }
            div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6" {
                @for show in upcoming { (card(show)) }
            }
        }
        section id="past-shows" class="mt-8" {
            h2 class="text-xl font-semibold mb-4" {
                (past_count) " Past " (if past_count == 1 { "Show" } else { "Shows" })
            }
            div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6" {
                @for show in past { (card(show)) }
            }
        }
    }
}

pub fn field_errors(errors: &[String]) -> Markup {
    html! {
        @for error in errors {
            p class="field-error" { (error) }
        }
    }
}

pub fn text_field(
    name: &str,
    label: &str,
    value: &str,
    placeholder: &str,
    errors: &[String],
) -> Markup {
    html! {
        div class="form-group" {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-2" { (label) }
            input
                type="text"
                id=(name)
                name=(name)
                value=(value)
                placeholder=(placeholder)
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2";
            (field_errors(errors))
        }
    }
}

pub fn textarea_field(name: &str, label: &str, value: &str, errors: &[String]) -> Markup {
    html! {
        div class="form-group" {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-2" { (label) }
            textarea
                id=(name)
                name=(name)
                rows="4"
                maxlength="500"
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2" {
                (value)
            }
            (field_errors(errors))
        }
    }
}

/// `options` are `(value, label)` pairs.
pub fn select_field(
    name: &str,
    label: &str,
    options: &[(&str, &str)],
    selected: &str,
    errors: &[String],
) -> Markup {
    html! {
        div class="form-group" {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-2" { (label) }
            select
                id=(name)
                name=(name)
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2" {
                @for (value, text) in options {
                    option value=(value) selected[*value == selected] { (text) }
                }
            }
            (field_errors(errors))
        }
    }
}

pub fn multi_select_field(
    name: &str,
    label: &str,
    options: &[&str],
    selected: &[String],
    errors: &[String],
) -> Markup {
    html! {
        div class="form-group" {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-2" { (label) }
            select
                id=(name)
                name=(name)
                multiple
                size="8"
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2" {
                @for value in options {
                    option value=(value) selected[selected.iter().any(|s| s == value)] { (value) }
                }
            }
            (field_errors(errors))
        }
    }
}
