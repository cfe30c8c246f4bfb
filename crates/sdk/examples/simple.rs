//! Simple SDK Example
//!
//! Demonstrates basic usage of the Dog API SDK.
//!
//! # Usage
//!
//! 1. Start the daemon:
//!    ```bash
//!    cargo run --package dogapi-daemon
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --package dogapi-sdk --example simple
//!    ```

use dogapi_sdk::DogApiClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Dog API SDK - Simple Example");
    println!("============================\n");

    // 1. Connect to daemon
    println!("1. Connecting to daemon...");
    let client = DogApiClient::connect("http://127.0.0.1:50051").await?;
    println!("   ✓ Connected\n");

    // 2. One random image
    println!("2. Fetching a random image...");
    let image = client.random_image().await?;
    println!("   ✓ {}\n", image.image_url);

    // 3. Sub-breeds of the hound
    println!("3. Listing hound sub-breeds...");
    let hounds = client.list_sub_breeds("hound").await?;
    println!("   ✓ {}\n", hounds.sub_breeds.join(", "));

    // 4. An out-of-range count is rejected before any upstream call
    println!("4. Requesting 0 images...");
    match client.random_images(0).await {
        Err(e) if e.is_invalid_argument() => println!("   ✓ Rejected: {}", e),
        other => println!("   ⚠ Unexpected: {:?}", other),
    }

    println!("\n✓ Example completed successfully!");

    Ok(())
}
