//! Adapters - Infrastructure implementations of ports and inbound surfaces.
//!
//! - `http` - axum JSON API over the application handlers
//! - `storage` - ProfileStore implementations (in-memory, JSON files)

pub mod http;
pub mod storage;
