use std::sync::Arc;

use shared::{
    domain::{Event, Post, Professional, SearchParams},
    protocol::Collection,
};
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::{
    error::NetworkError,
    store::{CollectionStore, Generation},
    transport::DirectoryApi,
};

/// Result of one load, returned so callers can surface failures if they want to.
#[derive(Debug)]
pub enum LoadOutcome {
    Committed { items: usize },
    Failed(NetworkError),
    /// A newer load for the same collection was issued first; this result was dropped.
    Superseded,
}

impl LoadOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, LoadOutcome::Committed { .. })
    }

    pub fn error(&self) -> Option<&NetworkError> {
        match self {
            LoadOutcome::Failed(error) => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct MountReport {
    pub professionals: LoadOutcome,
    pub events: LoadOutcome,
    pub posts: LoadOutcome,
}

#[derive(Debug)]
pub struct DirectoryState {
    pub professionals: CollectionStore<Professional>,
    pub events: CollectionStore<Event>,
    pub posts: CollectionStore<Post>,
    pub search: SearchParams,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self {
            professionals: CollectionStore::with_visible_loading(),
            events: CollectionStore::new(),
            posts: CollectionStore::new(),
            search: SearchParams::default(),
        }
    }
}

/// Read-only copy of the page state handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectorySnapshot {
    pub professionals: Vec<Professional>,
    pub professionals_loading: bool,
    pub events: Vec<Event>,
    pub posts: Vec<Post>,
    pub search: SearchParams,
}

impl From<&DirectoryState> for DirectorySnapshot {
    fn from(state: &DirectoryState) -> Self {
        Self {
            professionals: state.professionals.items().to_vec(),
            professionals_loading: state.professionals.is_loading(),
            events: state.events.items().to_vec(),
            posts: state.posts.items().to_vec(),
            search: state.search.clone(),
        }
    }
}

/// Sole writer of the three collection stores.
pub struct FetchOrchestrator {
    api: Arc<dyn DirectoryApi>,
    state: RwLock<DirectoryState>,
}

impl FetchOrchestrator {
    pub fn new(api: Arc<dyn DirectoryApi>) -> Self {
        Self {
            api,
            state: RwLock::new(DirectoryState::default()),
        }
    }

    /// Initial page load: all three collections, concurrently.
    pub async fn mount(&self) -> MountReport {
        let (professionals, events, posts) = tokio::join!(
            self.load_professionals(SearchParams::default()),
            self.load_events(),
            self.load_posts(),
        );
        MountReport {
            professionals,
            events,
            posts,
        }
    }

    /// Search form submission. Events and posts are left alone.
    pub async fn submit_search(&self, params: SearchParams) -> LoadOutcome {
        self.load_professionals(params).await
    }

    pub async fn load_professionals(&self, params: SearchParams) -> LoadOutcome {
        let generation = {
            let mut state = self.state.write().await;
            state.search = params.clone();
            state.professionals.begin_load()
        };
        let result = self.api.professionals(&params).await;
        let mut state = self.state.write().await;
        settle(
            Collection::Professionals,
            &mut state.professionals,
            generation,
            result,
        )
    }

    pub async fn load_events(&self) -> LoadOutcome {
        let generation = self.state.write().await.events.begin_load();
        let result = self.api.events().await;
        let mut state = self.state.write().await;
        settle(Collection::Events, &mut state.events, generation, result)
    }

    pub async fn load_posts(&self) -> LoadOutcome {
        let generation = self.state.write().await.posts.begin_load();
        let result = self.api.posts().await;
        let mut state = self.state.write().await;
        settle(Collection::Posts, &mut state.posts, generation, result)
    }

    pub async fn snapshot(&self) -> DirectorySnapshot {
        DirectorySnapshot::from(&*self.state.read().await)
    }

    /// One visitor's search: professionals for `params` on top of the shared
    /// events and posts. The shared stores and search values are not touched,
    /// so concurrent visitors never see each other's results.
    ///
    /// On failure the shared professionals list is shown instead.
    pub async fn search_snapshot(&self, params: SearchParams) -> DirectorySnapshot {
        let mut snapshot = self.snapshot().await;
        match self.api.professionals(&params).await {
            Ok(items) => {
                info!(
                    collection = Collection::Professionals.name(),
                    items = items.len(),
                    "search results loaded"
                );
                snapshot.professionals = items;
                snapshot.professionals_loading = false;
            }
            Err(err) => {
                error!(
                    collection = Collection::Professionals.name(),
                    error = %err,
                    "search failed; showing shared professionals"
                );
            }
        }
        snapshot.search = params;
        snapshot
    }
}

fn settle<T>(
    collection: Collection,
    store: &mut CollectionStore<T>,
    generation: Generation,
    result: Result<Vec<T>, NetworkError>,
) -> LoadOutcome {
    match result {
        Ok(items) => {
            let count = items.len();
            if store.commit(generation, items) {
                info!(collection = collection.name(), items = count, "collection loaded");
                LoadOutcome::Committed { items: count }
            } else {
                debug!(
                    collection = collection.name(),
                    generation = generation.value(),
                    current = store.generation().value(),
                    "discarding superseded response"
                );
                LoadOutcome::Superseded
            }
        }
        Err(err) => {
            if store.fail(generation) {
                error!(
                    collection = collection.name(),
                    error = %err,
                    "collection load failed; keeping last loaded items"
                );
                LoadOutcome::Failed(err)
            } else {
                warn!(
                    collection = collection.name(),
                    generation = generation.value(),
                    error = %err,
                    "superseded collection load failed"
                );
                LoadOutcome::Superseded
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/orchestrator_tests.rs"]
mod tests;
