//! Account overview example.
//!
//! This example reads the account, wallet and characters for an API key.
//! Transport errors are logged by an error handler instead of aborting.
//!
//! Run with: GW2_API_KEY=... cargo run --example account_overview

use gw2api::{ClientConfig, Gw2Client, RequestOptions};

fn main() -> gw2api::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let key = std::env::var("GW2_API_KEY").expect("GW2_API_KEY environment variable required");

    let client = Gw2Client::with_config(ClientConfig::blocking().with_error_handler(|err| {
        tracing::error!(error = %err, "request failed");
    }))?;

    let options = RequestOptions::new().with_key(key);

    if let Some(token) = client.account().token_info(Some(options.clone()), None)? {
        println!("Key '{}' grants {}", token["name"], token["permissions"]);
    }

    if let Some(account) = client.account().details(Some(options.clone()), None)? {
        println!("Account: {}", account["name"]);
    }

    if let Some(wallet) = client.account().wallet(Some(options.clone()), None)? {
        let currencies = wallet.as_array().map(Vec::len).unwrap_or(0);
        println!("Wallet holds {} currencies", currencies);
    }

    let characters = client.characters().list(Some(options.clone()), None)?;
    let names: Vec<String> = characters
        .as_ref()
        .and_then(|c| c.as_array())
        .into_iter()
        .flatten()
        .filter_map(|name| name.as_str().map(String::from))
        .collect();

    println!("\nFound {} character(s):", names.len());
    for name in &names {
        let options = options.clone().with_ids(name.as_str());
        if let Some(specs) = client.characters().specializations(Some(options), None)? {
            println!("  - {}: {}", name, specs["specializations"]["pve"]);
        }
    }

    Ok(())
}
