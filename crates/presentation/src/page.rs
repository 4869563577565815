use maud::{html, Markup, DOCTYPE};
use shared::domain::{Event, Post, Professional, SearchParams};

use crate::{events::events_list, feed::feed_list, professionals::professionals_grid};

const BRAND: &str = "Heritage x Hustle";

/// Options offered by the hero's region select. The backend receives the
/// chosen value verbatim.
pub const AFRICAN_COUNTRIES: [&str; 50] = [
    "Nigeria",
    "South Africa",
    "Kenya",
    "Ghana",
    "Egypt",
    "Ethiopia",
    "Morocco",
    "Algeria",
    "Tunisia",
    "Uganda",
    "Tanzania",
    "Rwanda",
    "Ivory Coast",
    "Senegal",
    "Cameroon",
    "Zambia",
    "Zimbabwe",
    "Botswana",
    "Namibia",
    "Mozambique",
    "Angola",
    "Sudan",
    "South Sudan",
    "Somalia",
    "DR Congo",
    "Congo",
    "Gabon",
    "Benin",
    "Togo",
    "Burkina Faso",
    "Mali",
    "Niger",
    "Liberia",
    "Sierra Leone",
    "Guinea",
    "Guinea-Bissau",
    "Gambia",
    "Cape Verde",
    "Mauritania",
    "Eritrea",
    "Djibouti",
    "Madagascar",
    "Seychelles",
    "Mauritius",
    "Comoros",
    "Lesotho",
    "Eswatini",
    "Central African Republic",
    "Equatorial Guinea",
    "Burundi",
];

/// Everything the page needs, borrowed from the caller's snapshot.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub professionals: &'a [Professional],
    pub professionals_loading: bool,
    pub events: &'a [Event],
    pub posts: &'a [Post],
    pub search: &'a SearchParams,
    pub year: i32,
}

pub fn render_page(view: PageView<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (BRAND) " | African Professionals Network" }
            }
            body {
                (header())
                (hero(view.search))
                main {
                    section id="professionals" {
                        (section_title("Network", "Meet the Professionals",
                            Some("Search and discover African experts ready to collaborate.")))
                        @if view.professionals_loading {
                            div class="loading" { "Loading..." }
                        } @else {
                            (professionals_grid(view.professionals))
                        }
                    }
                    section id="events" {
                        (section_title("Events", "Upcoming Events",
                            Some("Workshops, mixers, and conferences across the continent and diaspora.")))
                        (events_list(view.events))
                    }
                    section id="about" {
                        (section_title("About", "About Heritage x Hustle", None))
                        p {
                            "Heritage x Hustle is a community of African professionals dedicated to "
                            "elevating our craft and our culture. We connect talent across industries, "
                            "create opportunities through events and mentorship, and showcase excellence "
                            "rooted in heritage. Professional, bold, and proudly African."
                        }
                    }
                    section id="feed" {
                        (section_title("Stories", "Social Feed",
                            Some("Past events, blogs, and media from our community.")))
                        (feed_list(view.posts))
                    }
                }
                footer {
                    div { "© " (view.year) " " (BRAND) }
                    div { "Built with pride in gold and royal purple" }
                }
            }
        }
    }
}

fn header() -> Markup {
    html! {
        header {
            div class="brand" {
                div class="brand-mark" { "H" }
                div {
                    div class="brand-name" { (BRAND) }
                    div class="brand-tagline" { "African Professionals Network" }
                }
            }
            nav {
                a href="#search" { "Find Talent" }
                a href="#events" { "Events" }
                a href="#about" { "About" }
                a href="#feed" { "Social Feed" }
            }
        }
    }
}

fn hero(search: &SearchParams) -> Markup {
    let region = search.region();
    html! {
        section id="search" class="hero" {
            h1 { (BRAND) }
            p {
                "A community of African networking professionals championing culture, "
                "collaboration, and world-class execution."
            }
            form method="get" action="/search" {
                input type="text" name="q" value=(search.query())
                    placeholder="Search by role, skill or name (e.g. Product Manager, Cloud, Ayo)";
                select name="state" {
                    option value="" selected[region.is_empty()] { "All Countries" }
                    @for country in AFRICAN_COUNTRIES {
                        option value=(country) selected[region == country] { (country) }
                    }
                }
                button type="submit" { "Search" }
            }
        }
    }
}

fn section_title(eyebrow: &str, title: &str, subtitle: Option<&str>) -> Markup {
    html! {
        div class="section-title" {
            div class="eyebrow" { (eyebrow) }
            h2 { (title) }
            @if let Some(subtitle) = subtitle {
                p { (subtitle) }
            }
        }
    }
}
