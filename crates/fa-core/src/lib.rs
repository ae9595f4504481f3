//! Core types for Fake Artist: word pools, entries, and pool storage.
//!
//! A [`WordPool`] maps category names to the words that may be drawn for a
//! round. Pools are stored on disk as a JSON object of category to word list:
//!
//! ```json
//! { "food": ["Pizza", "Croissant", "Spaghetti"] }
//! ```

/// A single category/word pair.
pub mod entry;
/// Error types used throughout the crate.
pub mod error;
/// The word pool and its JSON storage.
pub mod pool;

/// Re-export the entry type.
pub use entry::WordEntry;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the pool type.
pub use pool::{WordPool, default_consumed_path};
