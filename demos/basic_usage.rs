//! Basic usage example for locex-rs
//!
//! This example demonstrates how to:
//! - Bootstrap a small in-memory gazetteer store
//! - Extract place names from free text
//! - Resolve them into the continent/country/region/city hierarchy

use locex_core::{Extractor, GazetteerStore, LocationRecord, Result};

fn seed_store() -> Result<GazetteerStore> {
    let mut store = GazetteerStore::open_in_memory()?;
    store.create_schema()?;
    store.insert_records(&[
        record("EU", "Europe", "DE", "Germany", "Land Berlin", "Berlin", true),
        record("EU", "Europe", "PL", "Poland", "Mazovia", "Warsaw", true),
        record("AF", "Africa", "KE", "Kenya", "Nairobi Province", "Nairobi", false),
        record("NA", "North America", "US", "United States", "Wisconsin", "Berlin", false),
    ])?;
    Ok(store)
}

fn record(
    continent_code: &str,
    continent: &str,
    iso: &str,
    country: &str,
    subdivision: &str,
    city: &str,
    eu: bool,
) -> LocationRecord {
    LocationRecord {
        locale_code: "en".into(),
        continent_code: continent_code.into(),
        continent_name: continent.into(),
        country_iso_code: iso.into(),
        country_name: country.into(),
        subdivision_name: subdivision.into(),
        city_name: city.into(),
        is_in_european_union: eu,
    }
}

fn main() -> Result<()> {
    println!("=== locex-rs Basic Usage Example ===\n");

    println!("Bootstrapping gazetteer store...");
    let extractor = Extractor::new(seed_store()?);
    println!("✓ Store ready\n");

    // Example 1: disambiguation by containment
    println!("--- Example 1: Berlin with a country mention ---");
    let found = extractor.extract_locations("Person living in Berlin, Germany")?;
    for country in &found.countries {
        println!("Country: {country}");
    }
    for city in &found.cities {
        println!("City: {city}");
    }
    println!();

    // Example 2: ambiguity preserved without context
    println!("--- Example 2: Berlin alone ---");
    let found = extractor.extract_locations("A report from Berlin")?;
    for city in &found.cities {
        println!("City: {city}");
    }
    println!();

    // Example 3: classification helpers
    println!("--- Example 3: Classification ---");
    for word in ["Kenya", "Warsaw", "plumber"] {
        println!(
            "{word}: is_country={} is_location={}",
            extractor.is_country(word)?,
            extractor.is_location(word)?,
        );
    }

    Ok(())
}
