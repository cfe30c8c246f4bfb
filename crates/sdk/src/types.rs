//! SDK Request/Response Types
//!
//! Mirrors the JSON-RPC types from the api-rpc crate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub(crate) mod method {
    pub const LIST_ALL_BREEDS: &str = "breeds.listAll.v1";
    pub const LIST_BREEDS: &str = "breeds.list.v1";
    pub const RANDOM_IMAGE: &str = "images.random.v1";
    pub const RANDOM_IMAGES: &str = "images.randomMany.v1";
    pub const BREED_IMAGES: &str = "breed.images.v1";
    pub const RANDOM_BREED_IMAGE: &str = "breed.randomImage.v1";
    pub const RANDOM_BREED_IMAGES: &str = "breed.randomImages.v1";
    pub const SUB_BREED_IMAGES: &str = "subBreed.images.v1";
    pub const RANDOM_SUB_BREED_IMAGE: &str = "subBreed.randomImage.v1";
    pub const LIST_SUB_BREEDS: &str = "breed.subBreeds.v1";
}

/// Request for a number of random images
#[derive(Debug, Clone, Serialize)]
pub struct RandomImagesRequest {
    pub count: i64,
}

/// Request scoped to one breed
#[derive(Debug, Clone, Serialize)]
pub struct BreedRequest {
    pub breed: String,
}

/// Request for random images of one breed
#[derive(Debug, Clone, Serialize)]
pub struct RandomBreedImagesRequest {
    pub breed: String,
    pub count: i64,
}

/// Request scoped to one sub-breed
#[derive(Debug, Clone, Serialize)]
pub struct SubBreedRequest {
    pub breed: String,
    pub sub_breed: String,
}

/// Sub-breeds of one catalog entry
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SubBreeds {
    pub sub_breeds: Vec<String>,
}

/// Full breed catalog
#[derive(Debug, Clone, Deserialize)]
pub struct ListAllBreedsResponse {
    pub breeds: BTreeMap<String, SubBreeds>,
}

/// Breed names
#[derive(Debug, Clone, Deserialize)]
pub struct ListBreedsResponse {
    pub breeds: Vec<String>,
}

/// Single image
#[derive(Debug, Clone, Deserialize)]
pub struct ImageResponse {
    pub image_url: String,
}

/// Image list, in upstream order
#[derive(Debug, Clone, Deserialize)]
pub struct ImagesResponse {
    pub image_urls: Vec<String>,
}

/// Sub-breed names of one breed
#[derive(Debug, Clone, Deserialize)]
pub struct ListSubBreedsResponse {
    pub sub_breeds: Vec<String>,
}
