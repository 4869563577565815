use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use chrono::{Datelike, Utc};
use client_core::{DirectorySnapshot, FetchOrchestrator};
use maud::Markup;
use presentation::{render_page, PageView};
use shared::domain::SearchParams;
use tracing::info;

pub(crate) struct AppState {
    pub(crate) orchestrator: Arc<FetchOrchestrator>,
}

pub(crate) fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/search", get(search))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn index(State(state): State<Arc<AppState>>) -> Markup {
    render_snapshot(&state.orchestrator.snapshot().await)
}

async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Markup {
    info!(q = params.query(), state = params.region(), "search submitted");
    render_snapshot(&state.orchestrator.search_snapshot(params).await)
}

pub(crate) fn render_snapshot(snapshot: &DirectorySnapshot) -> Markup {
    render_page(PageView {
        professionals: &snapshot.professionals,
        professionals_loading: snapshot.professionals_loading,
        events: &snapshot.events,
        posts: &snapshot.posts,
        search: &snapshot.search,
        year: Utc::now().year(),
    })
}

#[cfg(test)]
#[path = "tests/routes_tests.rs"]
mod tests;
