//! RPC Request/Response Types
//!
//! Defines the JSON-RPC method names, parameters and results.
//! Absent params (including `null` and an empty positional `[]`) decode to
//! their zero values so the service, not the decoder, reports missing
//! arguments.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Method names
pub mod method {
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

/// breeds.listAll.v1 / breeds.list.v1 / images.random.v1 - no parameters
#[derive(Debug, Default, Deserialize)]
pub struct EmptyRequest {}

/// images.randomMany.v1
#[derive(Debug, Default, Deserialize)]
pub struct RandomImagesRequest {
    #[serde(default)]
    pub count: i64,
}

/// breed.images.v1 / breed.randomImage.v1 / breed.subBreeds.v1
#[derive(Debug, Default, Deserialize)]
pub struct BreedRequest {
    #[serde(default)]
    pub breed: String,
}

/// breed.randomImages.v1
#[derive(Debug, Default, Deserialize)]
pub struct RandomBreedImagesRequest {
    #[serde(default)]
    pub breed: String,
    #[serde(default)]
    pub count: i64,
}

/// subBreed.images.v1 / subBreed.randomImage.v1
#[derive(Debug, Default, Deserialize)]
pub struct SubBreedRequest {
    #[serde(default)]
    pub breed: String,
    #[serde(default)]
    pub sub_breed: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SubBreeds {
    pub sub_breeds: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListAllBreedsResponse {
    pub breeds: BTreeMap<String, SubBreeds>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListBreedsResponse {
    pub breeds: Vec<String>,
}

/// Single image result
#[derive(Debug, Clone, Serialize)]
pub struct ImageResponse {
    pub image_url: String,
}

/// Image list result, in upstream order
#[derive(Debug, Clone, Serialize)]
pub struct ImagesResponse {
    pub image_urls: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListSubBreedsResponse {
    pub sub_breeds: Vec<String>,
}
