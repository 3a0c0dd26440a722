use locex_core::{GazetteerStore, LocationRecord};

fn rec(
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

/// A small slice of the GeoLite2 locations table, enough to exercise every
/// disambiguation tier: same-named cities on several continents, a city that
/// shares its name with a continent, acronym-only countries.
pub fn fixture_store() -> GazetteerStore {
    let mut store = GazetteerStore::open_in_memory().expect("in-memory store");
    store.create_schema().expect("schema");
    store
        .insert_records(&[
            rec("AF", "Africa", "KE", "Kenya", "", "", false),
            rec("AF", "Africa", "KE", "Kenya", "Nairobi Province", "Nairobi", false),
            rec("AF", "Africa", "KE", "Kenya", "Kajiado District", "Ngong", false),
            rec("AS", "Asia", "SY", "Syria", "", "", false),
            rec("AS", "Asia", "SY", "Syria", "Aleppo Governorate", "Aleppo", false),
            rec("EU", "Europe", "DE", "Germany", "", "", true),
            rec("EU", "Europe", "DE", "Germany", "Land Berlin", "Berlin", true),
            rec("EU", "Europe", "DE", "Germany", "Schleswig-Holstein", "Berlin", true),
            rec("EU", "Europe", "GB", "United Kingdom", "England", "London", false),
            rec("EU", "Europe", "GB", "United Kingdom", "England", "Worcester", false),
            rec("EU", "Europe", "PL", "Poland", "Mazovia", "Warsaw", true),
            rec("EU", "Europe", "PL", "Poland", "Pomerania", "Gdańsk", true),
            rec("EU", "Europe", "CZ", "Czechia", "", "", true),
            rec("EU", "Europe", "FR", "France", "", "", true),
            rec("EU", "Europe", "IS", "Iceland", "", "", false),
            rec("NA", "North America", "US", "United States", "", "", false),
            rec("NA", "North America", "US", "United States", "Wisconsin", "Berlin", false),
            rec("NA", "North America", "US", "United States", "New Hampshire", "Berlin", false),
            rec("NA", "North America", "US", "United States", "Massachusetts", "Worcester", false),
            rec("NA", "North America", "US", "United States", "Hawaii", "Honolulu", false),
            rec("NA", "North America", "US", "United States", "Indiana", "Warsaw", false),
            rec("OC", "Oceania", "AU", "Australia", "", "", false),
            rec("SA", "South America", "PE", "Peru", "Lima Province", "Asia", false),
        ])
        .expect("fixture rows");
    store
}
