use clap::Parser;

#[derive(Parser, Clone)]
pub struct Config {
    #[clap(env, long)]
    pub environment: String,

    #[clap(env, long, default_value = "http://localhost:8501")]
    pub origin_urls: String,

    #[clap(env, long, default_value = "api.txt")]
    pub api_key_file: String,

    #[clap(env, long, default_value = "https://places.googleapis.com/v1/places")]
    pub places_base_url: String,
}
