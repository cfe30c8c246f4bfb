//! RPC Method Handlers
//!
//! Shapes service results into the typed RPC responses.

use crate::error::to_rpc_error;
use crate::types::{
    BreedRequest, EmptyRequest, ImageResponse, ImagesResponse, ListAllBreedsResponse,
    ListBreedsResponse, ListSubBreedsResponse, RandomBreedImagesRequest, RandomImagesRequest,
    SubBreedRequest, SubBreeds,
};
use dogapi_core::application::DogService;
use jsonrpsee::types::ErrorObjectOwned;
use std::sync::Arc;

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    service: Arc<DogService>,
}

impl RpcHandler {
    pub fn new(service: Arc<DogService>) -> Self {
        Self { service }
    }

    /// breeds.listAll.v1
    pub async fn list_all_breeds(
        &self,
        _params: EmptyRequest,
    ) -> Result<ListAllBreedsResponse, ErrorObjectOwned> {
        let catalog = self
            .service
            .list_all_breeds()
            .await
            .map_err(to_rpc_error)?;

        let breeds = catalog
            .into_iter()
            .map(|(breed, sub_breeds)| (breed, SubBreeds { sub_breeds }))
            .collect();

        Ok(ListAllBreedsResponse { breeds })
    }

    /// breeds.list.v1
    pub async fn list_breeds(
        &self,
        _params: EmptyRequest,
    ) -> Result<ListBreedsResponse, ErrorObjectOwned> {
        let breeds = self.service.list_breeds().await.map_err(to_rpc_error)?;
        Ok(ListBreedsResponse { breeds })
    }

    /// images.random.v1
    pub async fn random_image(
        &self,
        _params: EmptyRequest,
    ) -> Result<ImageResponse, ErrorObjectOwned> {
        let image_url = self.service.random_image().await.map_err(to_rpc_error)?;
        Ok(ImageResponse { image_url })
    }

    /// images.randomMany.v1
    pub async fn random_images(
        &self,
        params: RandomImagesRequest,
    ) -> Result<ImagesResponse, ErrorObjectOwned> {
        let image_urls = self
            .service
            .random_images(params.count)
            .await
            .map_err(to_rpc_error)?;
        Ok(ImagesResponse { image_urls })
    }

    /// breed.images.v1
    pub async fn breed_images(
        &self,
        params: BreedRequest,
    ) -> Result<ImagesResponse, ErrorObjectOwned> {
        let image_urls = self
            .service
            .breed_images(&params.breed)
            .await
            .map_err(to_rpc_error)?;
        Ok(ImagesResponse { image_urls })
    }

    /// breed.randomImage.v1
    pub async fn random_breed_image(
        &self,
        params: BreedRequest,
    ) -> Result<ImageResponse, ErrorObjectOwned> {
        let image_url = self
            .service
            .random_breed_image(&params.breed)
            .await
            .map_err(to_rpc_error)?;
        Ok(ImageResponse { image_url })
    }

    /// breed.randomImages.v1
    pub async fn random_breed_images(
        &self,
        params: RandomBreedImagesRequest,
    ) -> Result<ImagesResponse, ErrorObjectOwned> {
        let image_urls = self
            .service
            .random_breed_images(&params.breed, params.count)
            .await
            .map_err(to_rpc_error)?;
        Ok(ImagesResponse { image_urls })
    }

    /// subBreed.images.v1
    pub async fn sub_breed_images(
        &self,
        params: SubBreedRequest,
    ) -> Result<ImagesResponse, ErrorObjectOwned> {
        let image_urls = self
            .service
            .sub_breed_images(&params.breed, &params.sub_breed)
            .await
            .map_err(to_rpc_error)?;
        Ok(ImagesResponse { image_urls })
    }

    /// subBreed.randomImage.v1
    pub async fn random_sub_breed_image(
        &self,
        params: SubBreedRequest,
    ) -> Result<ImageResponse, ErrorObjectOwned> {
        let image_url = self
            .service
            .random_sub_breed_image(&params.breed, &params.sub_breed)
            .await
            .map_err(to_rpc_error)?;
        Ok(ImageResponse { image_url })
    }

    /// breed.subBreeds.v1
    pub async fn list_sub_breeds(
        &self,
        params: BreedRequest,
    ) -> Result<ListSubBreedsResponse, ErrorObjectOwned> {
        let sub_breeds = self
            .service
            .list_sub_breeds(&params.breed)
            .await
            .map_err(to_rpc_error)?;
        Ok(ListSubBreedsResponse { sub_breeds })
    }
}
