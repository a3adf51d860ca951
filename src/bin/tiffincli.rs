use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tb_swiggy::{client::EndpointConfig, listing, Body, Client, Header};

#[derive(Parser, Debug)]
struct CliArgs {
    #[command(subcommand)]
    pub subcommand: Command,

    #[command(flatten)]
    pub global_opts: GlobalOpts,
}

#[derive(Args, Debug)]
struct GlobalOpts {
    #[arg(short = 'l', long, global = true, help = "Listing endpoint override")]
    pub listing_endpoint: Option<String>,

    #[arg(short = 'i', long, global = true, help = "Image CDN base URL override")]
    pub image_cdn_base: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    #[clap(
        name = "get-listing",
        about = "Fetch the listing once and print the extracted records as JSON"
    )]
    Listing,

    #[clap(name = "browse", about = "Render the restaurant grid")]
    Browse,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    let http = tb_swiggy::default_http_client();
    let endpoints = EndpointConfig {
        listing: args.global_opts.listing_endpoint,
        image_cdn_base: args.global_opts.image_cdn_base,
    };
    let client = Client::new(http, Some(endpoints))?;

    match args.subcommand {
        Command::Listing => {
            let response = client.get_listing().await?;
            let records = listing::restaurants(&response);
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Command::Browse => {
            let header = Header::new("Tiffinbot");
            println!("{}", header.render());
            let mut body = Body::new(client.image_cdn_base());
            // Shimmer grid while the one fetch is in flight.
            println!("{}", body.render());
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::with_template(
                "{spinner} fetching listing...",
            )?);
            spinner.enable_steady_tick(Duration::from_millis(100));
            body.load(&client).await?;
            spinner.finish_and_clear();
            println!("{}", body.render());
        }
    }

    Ok(())
}
