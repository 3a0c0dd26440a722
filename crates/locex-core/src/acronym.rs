// crates/locex-core/src/acronym.rs
use crate::error::Result;
use crate::store::{Column, GazetteerStore};
use crate::text::strip_the;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Acronyms the gazetteer cannot resolve by ISO-code lookup alone.
static ACRONYMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([("UK", "United Kingdom"), ("USA", "United States")])
});

/// Resolves a country acronym to its canonical country name.
///
/// The "the" token is stripped before the lookup, so "The USA" and "USA"
/// resolve identically. On a static-table miss the cleaned token is tried as
/// an ISO code against the store ("is" -> Iceland). Returns `None` when
/// nothing resolves; callers then fall back to querying with the original
/// string as a country name.
pub fn resolve_acronym(store: &GazetteerStore, name: &str) -> Result<Option<String>> {
    let token = strip_the(name).to_uppercase();
    if token.is_empty() {
        return Ok(None);
    }

    if let Some(canonical) = ACRONYMS.get(token.as_str()) {
        return Ok(Some((*canonical).to_string()));
    }

    let projected =
        store.fetch_one_projected(Column::CountryIsoCode, &token, &[Column::CountryName])?;
    Ok(projected.and_then(|mut columns| columns.pop()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LocationRecord;

    fn store() -> GazetteerStore {
        let mut store = GazetteerStore::open_in_memory().unwrap();
        store.create_schema().unwrap();
        store
            .insert_records(&[LocationRecord {
                locale_code: "en".into(),
                continent_code: "EU".into(),
                continent_name: "Europe".into(),
                country_iso_code: "IS".into(),
                country_name: "Iceland".into(),
                subdivision_name: "".into(),
                city_name: "".into(),
                is_in_european_union: false,
            }])
            .unwrap();
        store
    }

    #[test]
    fn static_table_wins_with_or_without_the() {
        let store = store();
        for input in ["USA", "usa", "The USA", "the usa"] {
            assert_eq!(
                resolve_acronym(&store, input).unwrap().as_deref(),
                Some("United States")
            );
        }
        assert_eq!(
            resolve_acronym(&store, "The UK").unwrap().as_deref(),
            Some("United Kingdom")
        );
    }

    #[test]
    fn iso_code_fallback_queries_the_store() {
        let store = store();
        assert_eq!(
            resolve_acronym(&store, "is").unwrap().as_deref(),
            Some("Iceland")
        );
    }

    #[test]
    fn unresolvable_input_returns_none() {
        let store = store();
        assert_eq!(resolve_acronym(&store, "Germany").unwrap(), None);
        assert_eq!(resolve_acronym(&store, "").unwrap(), None);
        assert_eq!(resolve_acronym(&store, "the").unwrap(), None);
    }
}
