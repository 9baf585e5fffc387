mod gatherer;
mod structs;

use gatherer::lobby_listing;
use serde::Deserialize;
use std::env;
use warp::Filter;

#[derive(Deserialize)]
struct ListingQuery {
    url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Ok(_) => {}
        Err(_) => log::info!(".env not found, using env variables..."),
    };

    flexi_logger::Logger::try_with_str("info")?.start()?;

    let port: u16 = env::var("LISTING_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3030);

    let health = warp::path::end().map(|| "lobby-listing up");
    // text in, text out: valid JSON means success, anything else is an error message
    let listing = warp::path("listing")
        .and(warp::path::end())
        .and(warp::query::<ListingQuery>())
        .then(|query: ListingQuery| async move { lobby_listing::parse_listing(&query.url).await });

    log::info!("Starting on port {}...", port);
    warp::serve(listing.or(health))
        .run(([0, 0, 0, 0], port))
        .await;

    Ok(())
}
