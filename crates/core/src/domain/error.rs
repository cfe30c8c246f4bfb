// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("breed is required")]
    MissingBreed,

    #[error("breed and sub-breed are required")]
    MissingBreedOrSubBreed,

    #[error("count must be between {} and {}", super::ImageCount::MIN, super::ImageCount::MAX)]
    CountOutOfRange(i64),
}

pub type Result<T> = std::result::Result<T, DomainError>;
