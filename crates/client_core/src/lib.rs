//! Client side of the directory page: fetching the three collections from the
//! backend, holding them, and deciding when each one is reloaded.

pub mod error;
pub mod orchestrator;
pub mod store;
pub mod transport;

pub use error::NetworkError;
pub use orchestrator::{
    DirectorySnapshot, DirectoryState, FetchOrchestrator, LoadOutcome, MountReport,
};
pub use store::{CollectionStore, Generation};
pub use transport::{ApiClient, DirectoryApi};
