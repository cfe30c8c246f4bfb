// Dog API Port (Upstream Adapter contract)
// One outbound call per operation; implementations hold no mutable state.

use crate::domain::{Breed, BreedCatalog, ImageCount, ImageUrl, SubBreed};
use async_trait::async_trait;
use thiserror::Error;

/// Failures raised by an upstream adapter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// Network failure, timeout, or a non-OK HTTP status
    #[error("transport error: {0}")]
    Transport(String),

    /// Body is not JSON or does not match the `{status, message}` envelope
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Envelope status was not "success"
    #[error("api returned error status: {0}")]
    Status(String),

    /// Envelope message had the wrong shape for the endpoint
    #[error("unexpected message format: expected {expected}, got {actual}")]
    Shape {
        expected: &'static str,
        actual: &'static str,
    },
}

/// Upstream dog-image API
///
/// Implementations:
/// - DogCeoClient (infra-http): HTTP/JSON against dog.ceo
/// - mocks::MockDogApi: scripted replies for tests
#[async_trait]
pub trait DogApi: Send + Sync {
    /// GET /breeds/list/all
    async fn list_all_breeds(&self) -> Result<BreedCatalog, UpstreamError>;

    /// GET /breeds/list
    async fn list_breeds(&self) -> Result<Vec<String>, UpstreamError>;

    /// GET /breeds/image/random
    async fn random_image(&self) -> Result<ImageUrl, UpstreamError>;

    /// GET /breeds/image/random/{count}
    async fn random_images(&self, count: ImageCount) -> Result<Vec<ImageUrl>, UpstreamError>;

    /// GET /breed/{breed}/images
    async fn breed_images(&self, breed: &Breed) -> Result<Vec<ImageUrl>, UpstreamError>;

    /// GET /breed/{breed}/images/random
    async fn random_breed_image(&self, breed: &Breed) -> Result<ImageUrl, UpstreamError>;

    /// GET /breed/{breed}/images/random/{count}
    async fn random_breed_images(
        &self,
        breed: &Breed,
        count: ImageCount,
    ) -> Result<Vec<ImageUrl>, UpstreamError>;

    /// GET /breed/{breed}/{sub}/images
    async fn sub_breed_images(&self, sub_breed: &SubBreed)
        -> Result<Vec<ImageUrl>, UpstreamError>;

    /// GET /breed/{breed}/{sub}/images/random
    async fn random_sub_breed_image(&self, sub_breed: &SubBreed)
        -> Result<ImageUrl, UpstreamError>;

    /// GET /breed/{breed}/list
    async fn list_sub_breeds(&self, breed: &Breed) -> Result<Vec<String>, UpstreamError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Mock upstream behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Answer every call from the canned data
        Success,
        /// Fail every call with this error
        Fail(UpstreamError),
        /// Sleep before answering (for deadline testing)
        Delay(Duration),
    }

    /// Canned upstream data
    #[derive(Debug, Clone, Default)]
    pub struct MockData {
        pub catalog: BreedCatalog,
        pub images: Vec<ImageUrl>,
    }

    /// Recorded call (operation name plus rendered arguments)
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct MockCall {
        pub operation: &'static str,
        pub args: Vec<String>,
    }

    /// Mock Dog API for testing
    pub struct MockDogApi {
        behavior: Arc<Mutex<MockBehavior>>,
        data: MockData,
        calls: Arc<Mutex<Vec<MockCall>>>,
    }

    impl MockDogApi {
        pub fn new(behavior: MockBehavior, data: MockData) -> Self {
            Self {
                behavior: Arc::new(Mutex::new(behavior)),
                data,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn new_success(data: MockData) -> Self {
            Self::new(MockBehavior::Success, data)
        }

        pub fn new_fail(error: UpstreamError) -> Self {
            Self::new(MockBehavior::Fail(error), MockData::default())
        }

        pub fn new_delayed(delay: Duration) -> Self {
            Self::new(MockBehavior::Delay(delay), MockData::default())
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub fn calls(&self) -> Vec<MockCall> {
            self.calls.lock().unwrap().clone()
        }

        async fn reply<T>(
            &self,
            operation: &'static str,
            args: Vec<String>,
            value: impl FnOnce(&MockData) -> T,
        ) -> Result<T, UpstreamError> {
            self.calls.lock().unwrap().push(MockCall { operation, args });

            let behavior = self.behavior.lock().unwrap().clone();
            match behavior {
                MockBehavior::Success => Ok(value(&self.data)),
                MockBehavior::Fail(err) => Err(err),
                MockBehavior::Delay(delay) => {
                    tokio::time::sleep(delay).await;
                    Ok(value(&self.data))
                }
            }
        }
    }

    fn first_image(data: &MockData) -> ImageUrl {
        data.images.first().cloned().unwrap_or_default()
    }

    #[async_trait]
    impl DogApi for MockDogApi {
        async fn list_all_breeds(&self) -> Result<BreedCatalog, UpstreamError> {
            self.reply("list_all_breeds", vec![], |d| d.catalog.clone())
                .await
        }

        async fn list_breeds(&self) -> Result<Vec<String>, UpstreamError> {
            self.reply("list_breeds", vec![], |d| d.catalog.keys().cloned().collect())
                .await
        }

        async fn random_image(&self) -> Result<ImageUrl, UpstreamError> {
            self.reply("random_image", vec![], first_image).await
        }

        async fn random_images(&self, count: ImageCount) -> Result<Vec<ImageUrl>, UpstreamError> {
            self.reply("random_images", vec![count.to_string()], |d| d.images.clone())
                .await
        }

        async fn breed_images(&self, breed: &Breed) -> Result<Vec<ImageUrl>, UpstreamError> {
            self.reply("breed_images", vec![breed.to_string()], |d| d.images.clone())
                .await
        }

        async fn random_breed_image(&self, breed: &Breed) -> Result<ImageUrl, UpstreamError> {
            self.reply("random_breed_image", vec![breed.to_string()], first_image)
                .await
        }

        async fn random_breed_images(
            &self,
            breed: &Breed,
            count: ImageCount,
        ) -> Result<Vec<ImageUrl>, UpstreamError> {
            self.reply(
                "random_breed_images",
                vec![breed.to_string(), count.to_string()],
                |d| d.images.clone(),
            )
            .await
        }

        async fn sub_breed_images(
            &self,
            sub_breed: &SubBreed,
        ) -> Result<Vec<ImageUrl>, UpstreamError> {
            self.reply(
                "sub_breed_images",
                vec![sub_breed.breed().to_string(), sub_breed.sub_breed().to_string()],
                |d| d.images.clone(),
            )
            .await
        }

        async fn random_sub_breed_image(
            &self,
            sub_breed: &SubBreed,
        ) -> Result<ImageUrl, UpstreamError> {
            self.reply(
                "random_sub_breed_image",
                vec![sub_breed.breed().to_string(), sub_breed.sub_breed().to_string()],
                first_image,
            )
            .await
        }

        async fn list_sub_breeds(&self, breed: &Breed) -> Result<Vec<String>, UpstreamError> {
            let key = breed.as_str().to_string();
            self.reply("list_sub_breeds", vec![key.clone()], move |d| {
                d.catalog.get(&key).cloned().unwrap_or_default()
            })
            .await
        }
    }
}
