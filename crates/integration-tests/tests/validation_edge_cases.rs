//! Validation edge cases
//!
//! Rejected requests must come back as INVALID_ARGUMENT and never reach upstream.

use dogapi_integration_tests::{success, Gateway};
use dogapi_sdk::code;
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_count_out_of_range_never_hits_upstream() {
    let upstream = MockServer::start_async().await;
    let mock = upstream
        .mock_async(|when, then| {
            when.method(GET).path_contains("/images/random");
            then.status(200).json_body(success(json!(["x"])));
        })
        .await;

    let gateway = Gateway::start(&upstream.base_url()).await;

    for count in [0, 51, -1, i64::MAX] {
        let err = gateway.client.random_images(count).await.unwrap_err();
        assert!(err.is_invalid_argument(), "count {count}: {err:?}");

        let err = gateway
            .client
            .random_breed_images("husky", count)
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument(), "count {count}: {err:?}");
    }

    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_count_bounds_are_inclusive() {
    let upstream = MockServer::start_async().await;
    let one = upstream
        .mock_async(|when, then| {
            when.method(GET).path("/breeds/image/random/1");
            then.status(200).json_body(success(json!(["x"])));
        })
        .await;
    let fifty = upstream
        .mock_async(|when, then| {
            when.method(GET).path("/breeds/image/random/50");
            then.status(200).json_body(success(json!(["x"])));
        })
        .await;

    let gateway = Gateway::start(&upstream.base_url()).await;

    assert!(gateway.client.random_images(1).await.is_ok());
    assert!(gateway.client.random_images(50).await.is_ok());
    one.assert_async().await;
    fifty.assert_async().await;
}

#[tokio::test]
async fn test_empty_identifiers_rejected() {
    let upstream = MockServer::start_async().await;
    let mock = upstream
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).json_body(success(json!([])));
        })
        .await;

    let gateway = Gateway::start(&upstream.base_url()).await;
    let client = &gateway.client;

    assert!(client.breed_images("").await.unwrap_err().is_invalid_argument());
    assert!(client
        .random_breed_image("")
        .await
        .unwrap_err()
        .is_invalid_argument());
    assert!(client.list_sub_breeds("").await.unwrap_err().is_invalid_argument());
    assert!(client
        .sub_breed_images("hound", "")
        .await
        .unwrap_err()
        .is_invalid_argument());
    assert!(client
        .random_sub_breed_image("", "afghan")
        .await
        .unwrap_err()
        .is_invalid_argument());

    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_breed_checked_before_count() {
    let upstream = MockServer::start_async().await;
    let gateway = Gateway::start(&upstream.base_url()).await;

    let err = gateway
        .client
        .random_breed_images("", 0)
        .await
        .unwrap_err();

    match err {
        dogapi_sdk::SdkError::Rpc { message, .. } => assert_eq!(message, "breed is required"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_params_are_invalid_argument() {
    let upstream = MockServer::start_async().await;
    let gateway = Gateway::start(&upstream.base_url()).await;

    let reply = gateway
        .raw_call(json!({"jsonrpc": "2.0", "id": 1, "method": "breed.images.v1"}))
        .await;

    assert_eq!(reply["error"]["code"], json!(code::INVALID_ARGUMENT));
    assert!(reply["error"].get("data").is_none());
}

#[tokio::test]
async fn test_empty_positional_params_are_invalid_argument() {
    let upstream = MockServer::start_async().await;
    let gateway = Gateway::start(&upstream.base_url()).await;

    let reply = gateway
        .raw_call(json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "breed.images.v1",
            "params": []
        }))
        .await;

    assert_eq!(reply["error"]["code"], json!(code::INVALID_ARGUMENT));
    assert_eq!(reply["error"]["message"], json!("breed is required"));
}

#[tokio::test]
async fn test_missing_count_is_invalid_argument() {
    let upstream = MockServer::start_async().await;
    let gateway = Gateway::start(&upstream.base_url()).await;

    let reply = gateway
        .raw_call(json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "images.randomMany.v1",
            "params": {}
        }))
        .await;

    assert_eq!(reply["id"], json!(7));
    assert_eq!(reply["error"]["code"], json!(code::INVALID_ARGUMENT));
    assert_eq!(reply["error"]["message"], json!("count must be between 1 and 50"));
}
