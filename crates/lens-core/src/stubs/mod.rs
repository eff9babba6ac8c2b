//! Stub implementations for testing and development.

mod in_memory;

pub use in_memory::InMemoryProfileStore;
