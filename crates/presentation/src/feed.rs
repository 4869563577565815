use maud::{html, Markup};
use shared::domain::Post;

use crate::format::{format_date, item_key, parse_timestamp, present};

pub const EMPTY_POSTS: &str = "No posts yet.";

pub fn feed_list(items: &[Post]) -> Markup {
    if items.is_empty() {
        return html! { div class="empty-state" { (EMPTY_POSTS) } };
    }
    html! {
        div class="grid feed" {
            @for (index, post) in items.iter().enumerate() {
                (post_card(post, index))
            }
        }
    }
}

fn post_card(p: &Post, index: usize) -> Markup {
    let key = item_key(p.key(), index);
    let title = p.title.as_deref().unwrap_or_default();
    let media = p
        .media_urls
        .as_deref()
        .and_then(<[String]>::first)
        .map(String::as_str);
    let published = p
        .published_at
        .as_deref()
        .and_then(parse_timestamp)
        .map(|at| format_date(&at))
        .unwrap_or_default();
    html! {
        div class="card post-card" data-key=(key) {
            @if let Some(src) = media {
                img class="media" src=(src) alt=(title);
            } @else {
                div class="media media-placeholder" {}
            }
            div class="card-body" {
                div class="kind" { (p.kind.as_deref().unwrap_or_default()) }
                div class="post-title" { (title) }
                @if let Some(body) = present(&p.body) {
                    div class="post-body" { (body) }
                }
                div class="published" { (published) }
            }
        }
    }
}
