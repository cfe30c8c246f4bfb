// Breed Domain Model

use super::error::{DomainError, Result};
use std::collections::BTreeMap;

/// Breed name to sub-breed names, as returned by one catalog fetch.
///
/// Ordering carries no meaning upstream; a sorted map keeps responses stable.
pub type BreedCatalog = BTreeMap<String, Vec<String>>;

/// Image URL, passed through verbatim from the upstream envelope
pub type ImageUrl = String;

/// Non-empty breed identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breed(String);

impl Breed {
    pub fn parse(s: impl Into<String>) -> Result<Self> {
        let s = s.into();
        if s.is_empty() {
            return Err(DomainError::MissingBreed);
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Breed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Breed plus sub-breed, both non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubBreed {
    breed: String,
    sub_breed: String,
}

impl SubBreed {
    pub fn parse(breed: impl Into<String>, sub_breed: impl Into<String>) -> Result<Self> {
        let breed = breed.into();
        let sub_breed = sub_breed.into();
        if breed.is_empty() || sub_breed.is_empty() {
            return Err(DomainError::MissingBreedOrSubBreed);
        }
        Ok(Self { breed, sub_breed })
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn sub_breed(&self) -> &str {
        &self.sub_breed
    }
}

impl std::fmt::Display for SubBreed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.breed, self.sub_breed)
    }
}

/// Number of random images to request, within `[MIN, MAX]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageCount(u8);

impl ImageCount {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 50;

    pub fn new(count: i64) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&count) {
            return Err(DomainError::CountOutOfRange(count));
        }
        Ok(Self(count as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for ImageCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
