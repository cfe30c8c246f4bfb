//! Dog API CLI - Command-line client for the Dog API gateway

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dogapi_sdk::{DogApiClient, ListAllBreedsResponse};
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:50051";

#[derive(Parser)]
#[command(name = "dogapi")]
#[command(about = "Dog API gateway CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "DOGAPI_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List every breed with its sub-breeds
    AllBreeds,

    /// List breed names
    Breeds,

    /// One random image of any breed
    Random,

    /// Several random images of any breed
    RandomMany {
        /// Number of images (1-50)
        #[arg(allow_negative_numbers = true)]
        count: i64,
    },

    /// All images of a breed
    BreedImages {
        /// Breed name (e.g., husky)
        breed: String,
    },

    /// One random image of a breed
    BreedRandom {
        /// Breed name
        breed: String,
    },

    /// Several random images of a breed
    BreedRandomMany {
        /// Breed name
        breed: String,

        /// Number of images (1-50)
        #[arg(allow_negative_numbers = true)]
        count: i64,
    },

    /// All images of a sub-breed
    SubBreedImages {
        /// Breed name (e.g., spaniel)
        breed: String,

        /// Sub-breed name (e.g., cocker)
        sub_breed: String,
    },

    /// One random image of a sub-breed
    SubBreedRandom {
        /// Breed name
        breed: String,

        /// Sub-breed name
        sub_breed: String,
    },

    /// List the sub-breeds of a breed
    SubBreeds {
        /// Breed name
        breed: String,
    },

    /// Walk through a few calls: random image, catalog, huskies, a cocker spaniel
    Tour,
}

#[derive(Tabled)]
struct BreedRow {
    breed: String,
    sub_breeds: String,
}

fn breed_table(catalog: &ListAllBreedsResponse) -> Table {
    let rows: Vec<BreedRow> = catalog
        .breeds
        .iter()
        .map(|(breed, subs)| BreedRow {
            breed: breed.clone(),
            sub_breeds: subs.sub_breeds.join(", "),
        })
        .collect();
    Table::new(rows)
}

fn print_urls(urls: &[String]) {
    for (i, url) in urls.iter().enumerate() {
        println!("  {} {}", format!("{:>2}.", i + 1).bold(), url);
    }
}

fn print_names(title: &str, names: &[String]) {
    println!("{}", format!("{} ({})", title, names.len()).cyan().bold());
    for name in names {
        println!("  • {}", name);
    }
}

async fn tour(client: &DogApiClient) -> Result<()> {
    println!("{}", "Getting a random dog image...".cyan().bold());
    let image = client
        .random_image()
        .await
        .context("could not get random image")?;
    println!("  Random image URL: {}\n", image.image_url);

    println!("{}", "Listing all breeds...".cyan().bold());
    let catalog = client
        .list_all_breeds()
        .await
        .context("could not list breeds")?;
    println!("  Found {} breeds", catalog.breeds.len());
    for (breed, subs) in &catalog.breeds {
        if subs.sub_breeds.is_empty() {
            println!("  {}", breed);
        } else {
            println!("  {}: {}", breed, subs.sub_breeds.join(", "));
        }
    }
    println!();

    println!("{}", "Getting 3 random husky images...".cyan().bold());
    let huskies = client
        .random_breed_images("husky", 3)
        .await
        .context("could not get breed images")?;
    print_urls(&huskies.image_urls);
    println!();

    println!("{}", "Getting a random cocker spaniel image...".cyan().bold());
    let cocker = client
        .random_sub_breed_image("spaniel", "cocker")
        .await
        .context("could not get sub-breed image")?;
    println!("  Cocker Spaniel image: {}", cocker.image_url);

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let client = DogApiClient::connect(&cli.rpc_url)
        .await
        .with_context(|| format!("Failed to connect to {}", cli.rpc_url))?;

    match cli.command {
        Commands::AllBreeds => {
            let catalog = client.list_all_breeds().await?;
            println!(
                "{}",
                format!("{} breeds", catalog.breeds.len()).green().bold()
            );
            println!("{}", breed_table(&catalog));
        }

        Commands::Breeds => {
            let response = client.list_breeds().await?;
            print_names("Breeds", &response.breeds);
        }

        Commands::Random => {
            let response = client.random_image().await?;
            println!("{}", response.image_url);
        }

        Commands::RandomMany { count } => {
            let response = client.random_images(count).await?;
            print_urls(&response.image_urls);
        }

        Commands::BreedImages { breed } => {
            let response = client.breed_images(breed).await?;
            print_urls(&response.image_urls);
        }

        Commands::BreedRandom { breed } => {
            let response = client.random_breed_image(breed).await?;
            println!("{}", response.image_url);
        }

        Commands::BreedRandomMany { breed, count } => {
            let response = client.random_breed_images(breed, count).await?;
            print_urls(&response.image_urls);
        }

        Commands::SubBreedImages { breed, sub_breed } => {
            let response = client.sub_breed_images(breed, sub_breed).await?;
            print_urls(&response.image_urls);
        }

        Commands::SubBreedRandom { breed, sub_breed } => {
            let response = client.random_sub_breed_image(breed, sub_breed).await?;
            println!("{}", response.image_url);
        }

        Commands::SubBreeds { breed } => {
            let response = client.list_sub_breeds(breed.clone()).await?;
            if response.sub_breeds.is_empty() {
                println!("{}", format!("{} has no sub-breeds", breed).yellow());
            } else {
                print_names(&format!("Sub-breeds of {}", breed), &response.sub_breeds);
            }
        }

        Commands::Tour => tour(&client).await?,
    }

    Ok(())
}
