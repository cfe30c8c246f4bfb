//! Dog API Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{
    method, BreedRequest, ImageResponse, ImagesResponse, ListAllBreedsResponse,
    ListBreedsResponse, ListSubBreedsResponse, RandomBreedImagesRequest, RandomImagesRequest,
    SubBreedRequest,
};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Default request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Dog API gateway client
///
/// Provides a typed interface to the gateway's ten operations.
///
/// # Example
///
/// ```no_run
/// use dogapi_sdk::DogApiClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = DogApiClient::connect("http://127.0.0.1:50051").await?;
/// let image = client.random_image().await?;
/// println!("{}", image.image_url);
/// # Ok(())
/// # }
/// ```
pub struct DogApiClient {
    client: HttpClient,
}

impl DogApiClient {
    /// Connect to the gateway
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:50051`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        Self::connect_with_timeout(url, DEFAULT_REQUEST_TIMEOUT).await
    }

    /// Connect with a custom per-request timeout
    pub async fn connect_with_timeout(url: impl AsRef<str>, timeout: Duration) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(timeout)
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// List every breed with its sub-breeds
    pub async fn list_all_breeds(&self) -> Result<ListAllBreedsResponse> {
        Ok(self.client.request(method::LIST_ALL_BREEDS, rpc_params![]).await?)
    }

    /// List breed names
    pub async fn list_breeds(&self) -> Result<ListBreedsResponse> {
        Ok(self.client.request(method::LIST_BREEDS, rpc_params![]).await?)
    }

    /// One random image of any breed
    pub async fn random_image(&self) -> Result<ImageResponse> {
        Ok(self.client.request(method::RANDOM_IMAGE, rpc_params![]).await?)
    }

    /// `count` random images of any breed (1..=50)
    pub async fn random_images(&self, count: i64) -> Result<ImagesResponse> {
        self.call(method::RANDOM_IMAGES, &RandomImagesRequest { count })
            .await
    }

    /// All images of a breed
    pub async fn breed_images(&self, breed: impl Into<String>) -> Result<ImagesResponse> {
        let request = BreedRequest {
            breed: breed.into(),
        };
        self.call(method::BREED_IMAGES, &request).await
    }

    /// One random image of a breed
    pub async fn random_breed_image(&self, breed: impl Into<String>) -> Result<ImageResponse> {
        let request = BreedRequest {
            breed: breed.into(),
        };
        self.call(method::RANDOM_BREED_IMAGE, &request).await
    }

    /// `count` random images of a breed (1..=50)
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use dogapi_sdk::DogApiClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = DogApiClient::connect("http://127.0.0.1:50051").await?;
    /// let response = client.random_breed_images("husky", 3).await?;
    /// for url in response.image_urls {
    ///     println!("{}", url);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn random_breed_images(
        &self,
        breed: impl Into<String>,
        count: i64,
    ) -> Result<ImagesResponse> {
        let request = RandomBreedImagesRequest {
            breed: breed.into(),
            count,
        };
        self.call(method::RANDOM_BREED_IMAGES, &request).await
    }

    /// All images of a sub-breed
    pub async fn sub_breed_images(
        &self,
        breed: impl Into<String>,
        sub_breed: impl Into<String>,
    ) -> Result<ImagesResponse> {
        let request = SubBreedRequest {
            breed: breed.into(),
            sub_breed: sub_breed.into(),
        };
        self.call(method::SUB_BREED_IMAGES, &request).await
    }

    /// One random image of a sub-breed
    pub async fn random_sub_breed_image(
        &self,
        breed: impl Into<String>,
        sub_breed: impl Into<String>,
    ) -> Result<ImageResponse> {
        let request = SubBreedRequest {
            breed: breed.into(),
            sub_breed: sub_breed.into(),
        };
        self.call(method::RANDOM_SUB_BREED_IMAGE, &request).await
    }

    /// Sub-breed names of a breed
    pub async fn list_sub_breeds(&self, breed: impl Into<String>) -> Result<ListSubBreedsResponse> {
        let request = BreedRequest {
            breed: breed.into(),
        };
        self.call(method::LIST_SUB_BREEDS, &request).await
    }

    async fn call<Req, Resp>(&self, method: &str, request: &Req) -> Result<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let params = object_params(request)?;
        Ok(self.client.request(method, params).await?)
    }
}

/// Send a request struct as named params
fn object_params<T: Serialize>(request: &T) -> Result<ObjectParams> {
    let mut params = ObjectParams::new();
    if let serde_json::Value::Object(fields) = serde_json::to_value(request)? {
        for (name, value) in fields {
            params.insert(&name, value)?;
        }
    }
    Ok(params)
}
