use crate::structs::lobby::{GetLobbyListing, Lobby};
use anyhow::Context;

/// Fetches the lobby listing XML from the given url and decodes it.
/// One GET per call, nothing is retried.
pub async fn fetch_listing(url: &str) -> anyhow::Result<Vec<Lobby>> {
    let client = reqwest::Client::new();
    let resp = client
        .get(url)
        .send()
        .await
        .context("failed to fetch the lobby listing url")?;
    if resp.status() != reqwest::StatusCode::OK {
        anyhow::bail!("lobby listing url returned status {}", resp.status());
    }
    let body = resp
        .text()
        .await
        .context("failed to read the lobby listing body")?;
    let listing: GetLobbyListing =
        serde_xml_rs::from_str(&body).context("lobby listing XML is incorrect")?;
    Ok(listing.lobbies)
}

/// Text boundary kept for existing callers: a JSON array on success,
/// a plain diagnostic sentence on any failure.
pub async fn parse_listing(url: &str) -> String {
    match fetch_listing(url).await {
        Ok(lobbies) => match serde_json::to_string(&lobbies) {
            Ok(json) => json,
            Err(e) => {
                log::error!("failed to encode lobbies to JSON: {:#?}", e);
                format!("Error encoding lobbies to JSON: {}", e)
            }
        },
        Err(e) => {
            log::error!("lobby listing from {} failed: {:#?}", url, e);
            format!("Error: {:#}", e)
        }
    }
}
