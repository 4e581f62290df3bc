//! # Storage Module
//!
//! Handles all data persistence for the diaper tracker.
//!
//! The whole child collection, logs included, is the unit of persistence: it
//! is loaded once at startup and written back in full after every mutation.
//!
//! ## Current Implementation
//!
//! - **JSON file**: `children.json` in the data directory, written through a
//!   temporary file and renamed into place

pub mod json;
pub mod traits;

pub use json::{JsonChildCollectionRepository, JsonConnection};
pub use traits::{ChildCollectionStorage, Connection};
