//! Job domain entity.

pub mod model;

pub use model::Job;
