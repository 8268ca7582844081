use anyhow::{bail, Context};
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use crate::config::Config;
use crate::repositories::places_api_repo::PlacesApiRepo;

pub mod config;
pub mod controller;
pub mod helpers;
pub mod models;
pub mod repositories;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    let api_key = load_api_key(&config.api_key_file)?;
    info!("Starting place search backend in environment: {}", config.environment);

    let places_repo = PlacesApiRepo::new(api_key, config.places_base_url.clone())?;
    controller::serve(places_repo, &config).await
}

fn load_api_key(api_key_file: &str) -> anyhow::Result<String> {
    let api_key = std::fs::read_to_string(api_key_file)
        .with_context(|| format!("Failed to read the places API key from: {}", api_key_file))?
        .trim()
        .to_string();

    if api_key.is_empty() {
        bail!("The places API key file is empty: {}", api_key_file);
    }
    Ok(api_key)
}
