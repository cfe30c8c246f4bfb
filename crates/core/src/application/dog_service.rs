// Dog Service - validates requests, calls the upstream port, maps failures
use crate::domain::{Breed, BreedCatalog, DomainError, ImageCount, ImageUrl, SubBreed};
use crate::error::{AppError, Result};
use crate::port::{DogApi, UpstreamError};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Default bound on a single upstream call made on behalf of a caller
pub const DEFAULT_CALL_DEADLINE: Duration = Duration::from_secs(10);

/// Request translator between the remote-call surface and the upstream port
///
/// Arguments are validated before any network cost is incurred. Every
/// upstream failure becomes `AppError::Internal` carrying the adapter's
/// message as detail. The service holds no mutable state, so one instance
/// can serve any number of concurrent calls.
pub struct DogService {
    api: Arc<dyn DogApi>,
    deadline: Duration,
}

impl DogService {
    pub fn new(api: Arc<dyn DogApi>) -> Self {
        Self {
            api,
            deadline: DEFAULT_CALL_DEADLINE,
        }
    }

    /// Override the per-call deadline
    ///
    /// Expiry drops the in-flight upstream request.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    pub async fn list_all_breeds(&self) -> Result<BreedCatalog> {
        self.call(
            "list_all_breeds",
            String::new(),
            "failed to list breeds",
            self.api.list_all_breeds(),
        )
        .await
    }

    pub async fn list_breeds(&self) -> Result<Vec<String>> {
        self.call(
            "list_breeds",
            String::new(),
            "failed to list breeds",
            self.api.list_breeds(),
        )
        .await
    }

    pub async fn random_image(&self) -> Result<ImageUrl> {
        self.call(
            "random_image",
            String::new(),
            "failed to get random image",
            self.api.random_image(),
        )
        .await
    }

    pub async fn random_images(&self, count: i64) -> Result<Vec<ImageUrl>> {
        let count = validated("random_images", ImageCount::new(count))?;
        self.call(
            "random_images",
            render_args(&[("count", &count)]),
            "failed to get random images",
            self.api.random_images(count),
        )
        .await
    }

    pub async fn breed_images(&self, breed: &str) -> Result<Vec<ImageUrl>> {
        let breed = validated("breed_images", Breed::parse(breed))?;
        self.call(
            "breed_images",
            render_args(&[("breed", &breed)]),
            "failed to get breed images",
            self.api.breed_images(&breed),
        )
        .await
    }

    pub async fn random_breed_image(&self, breed: &str) -> Result<ImageUrl> {
        let breed = validated("random_breed_image", Breed::parse(breed))?;
        self.call(
            "random_breed_image",
            render_args(&[("breed", &breed)]),
            "failed to get random breed image",
            self.api.random_breed_image(&breed),
        )
        .await
    }

    pub async fn random_breed_images(&self, breed: &str, count: i64) -> Result<Vec<ImageUrl>> {
        let breed = validated("random_breed_images", Breed::parse(breed))?;
        let count = validated("random_breed_images", ImageCount::new(count))?;
        self.call(
            "random_breed_images",
            render_args(&[("breed", &breed), ("count", &count)]),
            "failed to get random breed images",
            self.api.random_breed_images(&breed, count),
        )
        .await
    }

    pub async fn sub_breed_images(&self, breed: &str, sub_breed: &str) -> Result<Vec<ImageUrl>> {
        let sub_breed = validated("sub_breed_images", SubBreed::parse(breed, sub_breed))?;
        self.call(
            "sub_breed_images",
            sub_breed_args(&sub_breed),
            "failed to get sub-breed images",
            self.api.sub_breed_images(&sub_breed),
        )
        .await
    }

    pub async fn random_sub_breed_image(&self, breed: &str, sub_breed: &str) -> Result<ImageUrl> {
        let sub_breed = validated("random_sub_breed_image", SubBreed::parse(breed, sub_breed))?;
        self.call(
            "random_sub_breed_image",
            sub_breed_args(&sub_breed),
            "failed to get random sub-breed image",
            self.api.random_sub_breed_image(&sub_breed),
        )
        .await
    }

    pub async fn list_sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        let breed = validated("list_sub_breeds", Breed::parse(breed))?;
        self.call(
            "list_sub_breeds",
            render_args(&[("breed", &breed)]),
            "failed to list sub-breeds",
            self.api.list_sub_breeds(&breed),
        )
        .await
    }

    /// Run one upstream call under the deadline and map its failure
    async fn call<T, F>(
        &self,
        operation: &'static str,
        args: String,
        message: &'static str,
        fut: F,
    ) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, UpstreamError>>,
    {
        debug!(operation, args = %args, "Calling upstream");

        let outcome = match tokio::time::timeout(self.deadline, fut).await {
            Ok(outcome) => outcome,
            Err(_) => Err(UpstreamError::Transport(format!(
                "upstream deadline of {}ms exceeded",
                self.deadline.as_millis()
            ))),
        };

        outcome.map_err(|e| {
            warn!(operation, args = %args, error = %e, "Upstream call failed");
            AppError::internal(message, &e)
        })
    }
}

/// `key=value` pairs for log fields, e.g. `breed=husky count=3`
fn render_args(pairs: &[(&str, &(dyn fmt::Display + Sync))]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn sub_breed_args(sub_breed: &SubBreed) -> String {
    render_args(&[("breed", &sub_breed.breed()), ("sub_breed", &sub_breed.sub_breed())])
}

fn validated<T>(operation: &'static str, parsed: std::result::Result<T, DomainError>) -> Result<T> {
    parsed.map_err(|e| {
        debug!(operation, error = %e, "Rejected request");
        AppError::InvalidArgument(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::dog_api::mocks::{MockData, MockDogApi};
    use tokio_test::assert_ok;

    fn sample_data() -> MockData {
        let mut catalog = BreedCatalog::new();
        catalog.insert("husky".to_string(), vec!["agouti".to_string()]);
        catalog.insert("boxer".to_string(), vec![]);
        MockData {
            catalog,
            images: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        }
    }

    fn service_with(api: Arc<MockDogApi>) -> DogService {
        DogService::new(api)
    }

    #[tokio::test]
    async fn test_count_out_of_range_makes_no_call() {
        let api = Arc::new(MockDogApi::new_success(sample_data()));
        let service = service_with(api.clone());

        for count in [i64::MIN, -5, 0, 51, 500] {
            let err = service.random_images(count).await.unwrap_err();
            assert_eq!(
                err,
                AppError::InvalidArgument(DomainError::CountOutOfRange(count))
            );

            let err = service.random_breed_images("husky", count).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidArgument(_)));
        }

        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_count_bounds_are_inclusive() {
        let api = Arc::new(MockDogApi::new_success(sample_data()));
        let service = service_with(api.clone());

        assert_ok!(service.random_images(1).await);
        assert_ok!(service.random_images(50).await);
        assert_ok!(service.random_breed_images("husky", 50).await);

        let calls = api.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[2].operation, "random_breed_images");
        assert_eq!(calls[2].args, vec!["husky".to_string(), "50".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_identifiers_make_no_call() {
        let api = Arc::new(MockDogApi::new_success(sample_data()));
        let service = service_with(api.clone());

        let missing_breed = AppError::InvalidArgument(DomainError::MissingBreed);
        let missing_pair = AppError::InvalidArgument(DomainError::MissingBreedOrSubBreed);

        assert_eq!(service.breed_images("").await.unwrap_err(), missing_breed);
        assert_eq!(service.random_breed_image("").await.unwrap_err(), missing_breed);
        assert_eq!(
            service.random_breed_images("", 3).await.unwrap_err(),
            missing_breed
        );
        assert_eq!(service.list_sub_breeds("").await.unwrap_err(), missing_breed);
        assert_eq!(
            service.sub_breed_images("spaniel", "").await.unwrap_err(),
            missing_pair
        );
        assert_eq!(
            service.random_sub_breed_image("", "cocker").await.unwrap_err(),
            missing_pair
        );

        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_breed_checked_before_count() {
        let api = Arc::new(MockDogApi::new_success(sample_data()));
        let service = service_with(api);

        let err = service.random_breed_images("", 0).await.unwrap_err();
        assert_eq!(err, AppError::InvalidArgument(DomainError::MissingBreed));
    }

    #[tokio::test]
    async fn test_success_passes_values_through() {
        let api = Arc::new(MockDogApi::new_success(sample_data()));
        let service = service_with(api.clone());

        assert_eq!(service.random_image().await.unwrap(), "a");
        assert_eq!(
            service.random_images(3).await.unwrap(),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert_eq!(
            service.list_sub_breeds("husky").await.unwrap(),
            vec!["agouti".to_string()]
        );

        let catalog = service.list_all_breeds().await.unwrap();
        assert_eq!(catalog["husky"], vec!["agouti".to_string()]);
        assert!(catalog["boxer"].is_empty());

        let sub = service.random_sub_breed_image("spaniel", "cocker").await.unwrap();
        assert_eq!(sub, "a");
        assert_eq!(
            api.calls().last().unwrap().args,
            vec!["spaniel".to_string(), "cocker".to_string()]
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_becomes_internal() {
        let api = Arc::new(MockDogApi::new_fail(UpstreamError::Status(
            "error".to_string(),
        )));
        let service = service_with(api.clone());

        let err = service.random_image().await.unwrap_err();
        assert_eq!(
            err,
            AppError::Internal {
                message: "failed to get random image".to_string(),
                detail: "api returned error status: error".to_string(),
            }
        );

        let err = service.list_all_breeds().await.unwrap_err();
        assert!(matches!(err, AppError::Internal { ref message, .. } if message == "failed to list breeds"));

        let err = service.sub_breed_images("spaniel", "cocker").await.unwrap_err();
        assert!(matches!(err, AppError::Internal { ref message, .. } if message == "failed to get sub-breed images"));

        assert_eq!(api.call_count(), 3);
    }

    #[tokio::test]
    async fn test_every_upstream_error_kind_maps_to_internal() {
        let kinds = [
            UpstreamError::Transport("connection refused".to_string()),
            UpstreamError::Decode("expected value".to_string()),
            UpstreamError::Status("error".to_string()),
            UpstreamError::Shape {
                expected: "string",
                actual: "list",
            },
        ];

        for kind in kinds {
            let service = service_with(Arc::new(MockDogApi::new_fail(kind.clone())));
            match service.list_breeds().await.unwrap_err() {
                AppError::Internal { detail, .. } => assert_eq!(detail, kind.to_string()),
                other => panic!("expected Internal, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_deadline_bounds_slow_upstream() {
        let api = Arc::new(MockDogApi::new_delayed(Duration::from_secs(5)));
        let service = service_with(api).with_deadline(Duration::from_millis(20));
        assert_eq!(service.deadline(), Duration::from_millis(20));

        let started = std::time::Instant::now();
        let err = service.random_image().await.unwrap_err();

        assert!(started.elapsed() < Duration::from_secs(5));
        match err {
            AppError::Internal { detail, .. } => {
                assert!(detail.contains("deadline of 20ms exceeded"), "{detail}")
            }
            other => panic!("expected Internal, got {other:?}"),
        }
    }

    #[test]
    fn test_call_args_name_each_argument() {
        let breed = Breed::parse("husky").unwrap();
        let count = ImageCount::new(3).unwrap();
        assert_eq!(
            render_args(&[("breed", &breed), ("count", &count)]),
            "breed=husky count=3"
        );

        let sub_breed = SubBreed::parse("spaniel", "cocker").unwrap();
        assert_eq!(sub_breed_args(&sub_breed), "breed=spaniel sub_breed=cocker");
        assert_eq!(render_args(&[]), "");
    }
}
