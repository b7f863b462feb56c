//! Job store adapters.

pub mod job;
#[cfg(feature = "memory")]
pub mod memory;

pub use job::PgJobRepository;
#[cfg(feature = "memory")]
pub use memory::MemoryJobRepository;
