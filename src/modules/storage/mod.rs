//! Storage backends
//!
//! Provides an in-memory implementation of the category and question
//! repositories, used for local runs without Postgres and in tests.

mod memory;

pub use memory::InMemoryStore;
