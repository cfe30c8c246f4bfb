// Domain Layer - Pure value types and validation

pub mod breed;
pub mod error;

// Re-exports
pub use breed::{Breed, BreedCatalog, ImageCount, ImageUrl, SubBreed};
pub use error::DomainError;
