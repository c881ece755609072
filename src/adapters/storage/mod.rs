//! Storage Adapters
//!
//! Implementations of the ProfileStore port.
//!
//! ## Available Adapters
//!
//! - **FileProfileStore** - One JSON file per session on disk
//! - **InMemoryProfileStore** - Profiles held in memory (default, testing)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileProfileStore, InMemoryProfileStore};
//!
//! // Configured `storage.profile_dir`: file-based storage
//! let store = FileProfileStore::new("./data/profiles");
//!
//! // Otherwise: in-memory storage
//! let store = InMemoryProfileStore::new();
//! ```

mod file_profile_store;
mod in_memory_profile_store;

pub use file_profile_store::FileProfileStore;
pub use in_memory_profile_store::{InMemoryProfileStore, DEFAULT_PROFILE_CAPACITY};
