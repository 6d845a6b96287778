//! Products command handler listing refrigerated temperature requirements.

use anyhow::Result;
use serde::Serialize;

use stowage_lib::container::products;

#[derive(Debug, Serialize)]
struct ProductEntry {
    product: &'static str,
    required_temperature_c: f64,
}

/// Handle the products subcommand.
pub fn handle_products(json: bool) -> Result<()> {
    let entries: Vec<ProductEntry> = products::known_products()
        .into_iter()
        .map(|(product, required_temperature_c)| ProductEntry {
            product,
            required_temperature_c,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Known refrigerated products ({}):", entries.len());
    println!("{:<16} {:>12}", "Product", "Min Temp (C)");
    for entry in &entries {
        println!("{:<16} {:>12}", entry.product, entry.required_temperature_c);
    }
    Ok(())
}
