//! Cross-service reconciliation engine.
//!
//! Takes already-normalized per-service records (search hits or store
//! menus), matches the records that describe the same physical
//! restaurant, and produces one unified, deduplicated view. Pure
//! synchronous computation over in-memory data — fetching, auth, and
//! transport live upstream and are out of scope here.

pub mod error;
pub mod geo;
pub mod menu;
pub mod resolver;
pub mod similarity;

pub use error::ReconError;
pub use geo::{distance_miles, rank};
pub use menu::{merge, merge_menus, paginate};
pub use resolver::resolve;
pub use similarity::{normalize_title, title_similarity};
