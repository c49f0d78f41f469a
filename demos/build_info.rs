//! Current game build example.
//!
//! This example fetches the current build id and a couple of items using a
//! blocking client. No API key is required.
//!
//! Run with: cargo run --example build_info

use gw2api::{Gw2Client, RequestOptions};

fn main() -> gw2api::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client = Gw2Client::new()?;

    if let Some(build) = client.game().build(None, None)? {
        println!("Current build: {}", build["id"]);
    }

    let options = RequestOptions::new()
        .with_ids(vec![24, 68, 69])
        .with_language("en");

    if let Some(items) = client.game().items(Some(options), None)? {
        for item in items.as_array().into_iter().flatten() {
            println!("  - {} ({})", item["name"], item["id"]);
        }
    }

    Ok(())
}
