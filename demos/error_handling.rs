//! Error handling example for locex-rs
//!
//! This example demonstrates how data-access failures differ from
//! empty lookups

use locex_core::{Extractor, GazetteerStore, LocexError, Result};

fn main() -> Result<()> {
    println!("=== locex-rs Error Handling Example ===\n");

    // Example 1: opening a store that does not exist
    println!("--- Example 1: Missing gazetteer database ---");
    match GazetteerStore::open("/tmp/no-such-gazetteer.db") {
        Ok(_) => println!("✓ Store opened"),
        Err(LocexError::NotFound(path)) => println!("✗ No dataset at {path}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 2: querying a store whose schema was never bootstrapped
    println!("--- Example 2: Schema missing ---");
    let bare = GazetteerStore::open_in_memory()?;
    let extractor = Extractor::new(bare);
    match extractor.is_location("Berlin") {
        Ok(_) => println!("✓ Lookup succeeded"),
        Err(LocexError::Store(e)) => println!("✗ Store failure surfaced immediately: {e}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 3: no-match lookups are not errors
    println!("--- Example 3: Empty lookups ---");
    let mut store = GazetteerStore::open_in_memory()?;
    store.create_schema()?;
    store.insert_records(&[])?;
    let extractor = Extractor::new(store);
    println!(
        "'dupa' is a location: {}",
        extractor.is_location("dupa")?
    );

    Ok(())
}
