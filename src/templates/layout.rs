use maud::{html, Markup, DOCTYPE};

pub fn base_layout(title: &str, flash: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class="h-full" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - Gigbook" }

                script src="https://cdn.tailwindcss.com" {}
                link rel="stylesheet" href="/static/css/app.css";

                // HTMX for the delete button
                script src="https://unpkg.com/htmx.org@1.9.10" {}
            }
            body class="h-full bg-gray-50" {
                div class="min-h-full" {
                    (nav_bar())

                    main class="container mx-auto px-4 py-8" {
                        @if let Some(message) = flash {
                            (flash_banner(message))
                        }
                        (content)
                    }

                    (footer())
                }
            }
        }
    }
}

fn flash_banner(message: &str) -> Markup {
    html! {
        div class="flash p-4 mb-6 rounded-md bg-green-50 text-green-800" role="alert" {
            (message)
        }
    }
}

fn nav_bar() -> Markup {
    html! {
        nav class="bg-white shadow-sm" {
            div class="container mx-auto px-4" {
                div class="flex justify-between items-center h-16" {
                    a href="/" class="flex items-center space-x-3" {
                        span class="text-2xl" { "🎤" }
                        span class="text-xl font-bold text-gray-900" { "Gigbook" }
                    }

                    div class="flex space-x-4" {
                        a href="/venues" class="nav-link" { "Venues" }
                        a href="/artists" class="nav-link" { "Artists" }
                        a href="/shows" class="nav-link" { "Shows" }
                    }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="bg-white border-t border-gray-200 mt-12" {
            div class="container mx-auto px-4 py-6" {
                div class="text-center text-gray-600 text-sm" {
                    "Gigbook - venues, artists, and the shows between them"
                }
            }
        }
    }
}
