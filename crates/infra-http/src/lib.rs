// Dog API Infrastructure - HTTP Adapter
// Implements: DogApi over the dog.ceo JSON API

pub mod dog_ceo_client;
pub mod envelope;

pub use dog_ceo_client::{DogCeoClient, DogCeoConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
