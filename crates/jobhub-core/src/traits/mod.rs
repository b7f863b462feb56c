//! Core traits defined in `jobhub-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;
