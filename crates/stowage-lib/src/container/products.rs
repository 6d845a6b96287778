//! Required storage temperatures for refrigerated products.

use std::collections::HashMap;

use once_cell::sync::Lazy;

static REQUIRED_TEMPERATURES: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("Bananas", 13.3),
        ("Chocolate", 18.0),
        ("Fish", 2.0),
        ("Meat", -15.0),
        ("Ice cream", -18.0),
        ("Frozen pizza", -30.0),
        ("Cheese", 7.2),
        ("Sausage", 5.0),
        ("Butter", 20.5),
        ("Eggs", 19.0),
    ])
});

/// Minimum storage temperature (°C) required for a known product.
///
/// Lookup is exact-match; product names are case-sensitive.
pub fn required_temperature(product: &str) -> Option<f64> {
    REQUIRED_TEMPERATURES.get(product).copied()
}

/// All known products with their required temperatures, sorted by name.
pub fn known_products() -> Vec<(&'static str, f64)> {
    let mut products: Vec<(&'static str, f64)> = REQUIRED_TEMPERATURES
        .iter()
        .map(|(name, temperature)| (*name, *temperature))
        .collect();
    products.sort_by(|a, b| a.0.cmp(b.0));
    products
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_exact_match() {
        assert_eq!(required_temperature("Bananas"), Some(13.3));
        assert_eq!(required_temperature("bananas"), None);
    }

    #[test]
    fn listing_covers_every_product_once() {
        let products = known_products();
        assert_eq!(products.len(), 10);
        assert!(products.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }
}
