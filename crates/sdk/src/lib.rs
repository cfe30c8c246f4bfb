//! Dog API SDK - Rust Client Library
//!
//! Provides a typed client for the Dog API gateway's JSON-RPC surface.
//!
//! # Example
//!
//! ```no_run
//! use dogapi_sdk::DogApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DogApiClient::connect("http://127.0.0.1:50051").await?;
//!
//!     let breeds = client.list_all_breeds().await?;
//!     println!("Found {} breeds", breeds.breeds.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{DogApiClient, DEFAULT_REQUEST_TIMEOUT};
pub use error::{code, Result, SdkError};
pub use types::{
    BreedRequest, ImageResponse, ImagesResponse, ListAllBreedsResponse, ListBreedsResponse,
    ListSubBreedsResponse, RandomBreedImagesRequest, RandomImagesRequest, SubBreedRequest,
    SubBreeds,
};
