use clap::Parser;
use tb_swiggy::{client::EndpointConfig, Client, Restaurant};

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'l', long)]
    listing_endpoint: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let http = reqwest::Client::builder()
        .gzip(true)
        .brotli(true)
        .build()
        .unwrap();
    let endpoints = EndpointConfig {
        listing: args.listing_endpoint,
        image_cdn_base: None,
    };
    endpoints.validate().unwrap();
    let client = Client::new(http, Some(endpoints)).unwrap();
    let response = client.get_listing().await.unwrap();
    let restaurants = tb_swiggy::listing::restaurants(&response);
    println!(
        "{}",
        serde_json::to_string::<Vec<Restaurant>>(&restaurants).unwrap()
    );
}
