//! HTML rendering for the directory page.
//!
//! Everything here is a pure function of the records it is given: no
//! fetching, no state. Cards come out in input order and carry a stable
//! `data-key` so a replaced list keeps its identity across re-renders.

mod events;
mod feed;
pub mod format;
mod page;
mod professionals;

pub use events::{events_list, EMPTY_EVENTS};
pub use feed::{feed_list, EMPTY_POSTS};
pub use page::{render_page, PageView, AFRICAN_COUNTRIES};
pub use professionals::{professionals_grid, EMPTY_PROFESSIONALS};
