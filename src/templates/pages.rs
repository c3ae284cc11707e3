use axum::http::StatusCode;
use maud::{html, Markup};

use super::components::{
    artist_show_card, genre_tags, search_box, show_listing_card, show_sections, summary_row,
    venue_show_card,
};
use super::layout::base_layout;
use crate::services::{Area, ArtistDetail, SearchHit, SearchResults, ShowListing, VenueDetail};

pub fn home_page(flash: Option<&str>) -> Markup {
    base_layout(
        "Home",
        flash,
        html! {
            div class="text-center py-16" {
                h1 class="text-4xl font-bold text-gray-900 mb-4" { "Find your next show" }
                p class="text-gray-600 mb-8" {
                    "Browse venues and artists, or list your own."
                }
                div class="flex justify-center gap-4" {
                    a href="/venues/create" class="px-4 py-2 bg-orange-600 hover:bg-orange-700 text-white font-semibold rounded-md" {
                        "Post a venue"
                    }
                    a href="/artists/create" class="px-4 py-2 bg-orange-600 hover:bg-orange-700 text-white font-semibold rounded-md" {
                        "Post an artist"
                    }
                    a href="/shows/create" class="px-4 py-2 bg-gray-800 hover:bg-gray-900 text-white font-semibold rounded-md" {
                        "Post a show"
                    }
                }
            }
        },
    )
}

pub fn venues_page(areas: &[Area], flash: Option<&str>) -> Markup {
    base_layout(
        "Venues",
        flash,
        html! {
            h1 class="text-3xl font-bold text-gray-900 mb-6" { "Venues" }
            (search_box("/venues/search", "Find a venue", ""))

            @if areas.is_empty() {
                p class="text-gray-600 text-lg" { "No venues listed yet." }
            }
            @for area in areas {
                section class="area mb-8" {
                    h2 class="text-xl font-semibold text-gray-800" {
                        (area.city) ", " (area.state)
                    }
                    ul class="divide-y divide-gray-200" {
                        @for venue in &area.venues {
                            (summary_row(&format!("/venues/{}", venue.id), &venue.name, venue.num_upcoming_shows))
                        }
                    }
                }
            }
        },
    )
}

pub fn artists_page(artists: &[(i32, String)], flash: Option<&str>) -> Markup {
    base_layout(
        "Artists",
        flash,
        html! {
            h1 class="text-3xl font-bold text-gray-900 mb-6" { "Artists" }
            (search_box("/artists/search", "Find an artist", ""))

            @if artists.is_empty() {
                p class="text-gray-600 text-lg" { "No artists listed yet." }
            }
            ul class="divide-y divide-gray-200" {
                @for (id, name) in artists {
                    li class="py-2" {
                        a href=(format!("/artists/{}", id)) class="text-gray-900 font-medium hover:underline" {
                            (name)
                        }
                    }
                }
            }
        },
    )
}

/// Results of a venue or artist search. `base` is `/venues` or `/artists`.
pub fn search_results_page(base: &str, term: &str, results: &SearchResults<SearchHit>) -> Markup {
    base_layout(
        "Search",
        None,
        html! {
            (search_box(&format!("{}/search", base), "Search again", term))
            h2 class="text-xl font-semibold mb-4" {
                "Number of search results for \"" (term) "\": " (results.count)
            }
            ul class="divide-y divide-gray-200" {
                @for hit in &results.data {
                    (summary_row(&format!("{}/{}", base, hit.id), &hit.name, hit.num_upcoming_shows))
                }
            }
        },
    )
}

fn contact_line(label: &str, value: &str) -> Markup {
    html! {
        p class="text-sm text-gray-700" {
            span class="font-medium" { (label) ": " }
            (value)
        }
    }
}

fn link_line(label: &str, link: Option<&str>) -> Markup {
    html! {
        @if let Some(link) = link {
            p class="text-sm text-gray-700" {
                span class="font-medium" { (label) ": " }
                a href=(link) class="text-orange-700 hover:underline" target="_blank" rel="noopener" { (link) }
            }
        }
    }
}

fn seeking_callout(seeking: bool, what: &str, description: Option<&str>) -> Markup {
    html! {
        @if seeking {
            div class="seeking p-4 my-4 rounded-md bg-orange-50 border border-orange-200" {
                p class="font-semibold text-orange-800" { "Currently seeking " (what) }
                @if let Some(description) = description {
                    p class="text-sm text-orange-700 mt-1" { (description) }
                }
            }
        } @else {
            p class="text-sm text-gray-500 my-4" { "Not currently seeking " (what) }
        }
    }
}

pub fn venue_page(detail: &VenueDetail, flash: Option<&str>) -> Markup {
    let venue = &detail.venue;
    let shows = &detail.shows;

    base_layout(
        &venue.name,
        flash,
        html! {
            div class="grid md:grid-cols-3 gap-8" {
                div class="md:col-span-2 space-y-2" {
                    div class="flex items-center justify-between" {
                        h1 class="text-3xl font-bold text-gray-900" { (venue.name) }
                        div class="flex gap-2" {
                            a href=(format!("/venues/{}/edit", venue.id))
                              class="px-3 py-1 border border-gray-300 rounded-md text-sm hover:bg-gray-100" {
                                "Edit"
                            }
                            button
                                hx-delete=(format!("/venues/{}", venue.id))
                                hx-confirm=(format!("Delete {} and all of its shows?", venue.name))
                                class="px-3 py-1 bg-red-600 hover:bg-red-700 text-white rounded-md text-sm" {
                                "Delete"
                            }
                        }
                    }
                    p class="text-xs text-gray-400" { "ID: " (venue.id) }
                    (genre_tags(venue.genres.iter()))
                    (contact_line("Address", &venue.address))
                    (contact_line("Location", &format!("{}, {}", venue.city, venue.state)))
                    (contact_line("Phone", &venue.phone))
                    (link_line("Website", venue.website.as_deref()))
                    (link_line("Facebook", venue.facebook_link.as_deref()))
                    (seeking_callout(venue.seeking_talent, "talent", venue.seeking_description.as_deref()))
                }
                @if let Some(image) = &venue.image_link {
                    img src=(image) alt=(venue.name) class="w-full rounded-lg shadow-md object-cover";
                }
            }

            (show_sections(
                &shows.upcoming_shows,
                shows.upcoming_shows_count,
                &shows.past_shows,
                shows.past_shows_count,
                venue_show_card,
            ))
        },
    )
}

pub fn artist_page(detail: &ArtistDetail, flash: Option<&str>) -> Markup {
    let artist = &detail.artist;
    let shows = &detail.shows;

    base_layout(
        &artist.name,
        flash,
        html! {
            div class="grid md:grid-cols-3 gap-8" {
                div class="md:col-span-2 space-y-2" {
                    div class="flex items-center justify-between" {
                        h1 class="text-3xl font-bold text-gray-900" { (artist.name) }
                        a href=(format!("/artists/{}/edit", artist.id))
                          class="px-3 py-1 border border-gray-300 rounded-md text-sm hover:bg-gray-100" {
                            "Edit"
                        }
                    }
                    p class="text-xs text-gray-400" { "ID: " (artist.id) }
                    (genre_tags(artist.genres.iter()))
                    (contact_line("Location", &format!("{}, {}", artist.city, artist.state)))
                    (contact_line("Phone", &artist.phone))
                    (link_line("Website", artist.website.as_deref()))
                    (link_line("Facebook", artist.facebook_link.as_deref()))
                    (seeking_callout(artist.seeking_venue, "performance venues", artist.seeking_description.as_deref()))
                }
                @if let Some(image) = &artist.image_link {
                    img src=(image) alt=(artist.name) class="w-full rounded-lg shadow-md object-cover";
                }
            }

            (show_sections(
                &shows.upcoming_shows,
                shows.upcoming_shows_count,
                &shows.past_shows,
                shows.past_shows_count,
                artist_show_card,
            ))
        },
    )
}

pub fn shows_page(shows: &[ShowListing], flash: Option<&str>) -> Markup {
    base_layout(
        "Shows",
        flash,
        html! {
            div class="flex items-center justify-between mb-6" {
                h1 class="text-3xl font-bold text-gray-900" { "Shows" }
                a href="/shows/create" class="px-4 py-2 bg-orange-600 hover:bg-orange-700 text-white font-semibold rounded-md" {
                    "Post a show"
                }
            }

            @if shows.is_empty() {
                p class="text-gray-600 text-lg" { "No shows listed yet." }
            } @else {
                div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6" {
                    @for show in shows {
                        (show_listing_card(show))
                    }
                }
            }
        },
    )
}

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let title = status.canonical_reason().unwrap_or("Error");

    base_layout(
        title,
        None,
        html! {
            div class="text-center py-16" {
                h1 class="text-5xl font-bold text-gray-900 mb-2" { (status.as_u16()) }
                h2 class="text-xl text-gray-700 mb-6" { (title) }
                p class="error-message text-gray-600 mb-8" { (message) }
                a href="/" class="text-orange-700 hover:underline" { "Back to the home page" }
            }
        },
    )
}
