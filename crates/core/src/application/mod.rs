// Application Layer - Use Cases

pub mod dog_service;

// Re-exports
pub use dog_service::{DogService, DEFAULT_CALL_DEADLINE};
