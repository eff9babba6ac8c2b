//! Core trait definitions for the profile lens engine.

mod store;

pub use store::{MetadataFilter, ProfileStore, SearchOptions, StoreMatch};
