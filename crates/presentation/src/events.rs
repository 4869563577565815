use maud::{html, Markup};
use shared::domain::Event;

use crate::format::{format_date_time, item_key, parse_timestamp, present};

pub const EMPTY_EVENTS: &str = "No upcoming events yet.";

const UNKNOWN_START: &str = "Date TBA";

pub fn events_list(items: &[Event]) -> Markup {
    if items.is_empty() {
        return html! { div class="empty-state" { (EMPTY_EVENTS) } };
    }
    html! {
        div class="grid events" {
            @for (index, event) in items.iter().enumerate() {
                (event_card(event, index))
            }
        }
    }
}

fn event_card(e: &Event, index: usize) -> Markup {
    let key = item_key(e.key(), index);
    let title = e.title.as_deref().unwrap_or_default();
    let starts = e
        .start_time
        .as_deref()
        .and_then(parse_timestamp)
        .map(|at| format_date_time(&at))
        .unwrap_or_else(|| UNKNOWN_START.to_string());
    html! {
        div class="card event-card" data-key=(key) {
            @if let Some(cover) = present(&e.cover_image) {
                img class="cover" src=(cover) alt=(title);
            } @else {
                div class="cover cover-placeholder" {}
            }
            div class="card-body" {
                div class="starts" { (starts) }
                div class="event-title" { (title) }
                div class="description" { (e.description.as_deref().unwrap_or_default()) }
                @if let Some(location) = present(&e.location) {
                    div class="location" {
                        (location)
                        @if let Some(region) = present(&e.state) {
                            " • " (region)
                        }
                    }
                }
                @if let Some(url) = present(&e.registration_url) {
                    a class="register" href=(url) target="_blank" { "Register" }
                }
            }
        }
    }
}
