// Port Layer - Interfaces for external dependencies

pub mod dog_api;

// Re-exports
pub use dog_api::{DogApi, UpstreamError};
