// crates/locex-core/src/model.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A continent. Leaf of the containment hierarchy.
///
/// All entity types are immutable value types: they compare structurally
/// (full-field equality) and carry a total order so that resolved sets come
/// out deduplicated and in a deterministic, human-friendly order. They are
/// built fresh from [`LocationRecord`]s on every resolution call and never
/// persisted.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Continent {
    pub name: String,
}

/// A country, owned-by-value inside its continent.
///
/// Field order is load-bearing: the derived `Ord` is lexicographic over
/// `(continent, name, iso_code)`, which groups result lists by continent.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Country {
    pub continent: Continent,
    pub name: String,
    pub iso_code: String,
}

/// An administrative subdivision. Only the most specific configured level is
/// modeled; there are no nested regions. Ordered by `(country, name)`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Region {
    pub country: Country,
    pub name: String,
}

/// A city. Some gazetteer rows carry no subdivision, so `region` is optional;
/// the country is always present. Ordered by `(country, region, name)`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct City {
    pub country: Country,
    pub region: Option<Region>,
    pub name: String,
}

/// One gazetteer row, the sole shape returned by store queries.
///
/// All four entity types are derived from this flat tuple by field
/// projection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub locale_code: String,
    pub continent_code: String,
    pub continent_name: String,
    pub country_iso_code: String,
    pub country_name: String,
    pub subdivision_name: String,
    pub city_name: String,
    pub is_in_european_union: bool,
}

impl Continent {
    pub fn from_record(record: &LocationRecord) -> Self {
        Continent {
            name: record.continent_name.clone(),
        }
    }
}

impl Country {
    pub fn from_record(record: &LocationRecord) -> Self {
        Country {
            continent: Continent::from_record(record),
            name: record.country_name.clone(),
            iso_code: record.country_iso_code.clone(),
        }
    }
}

impl Region {
    /// Rows without a subdivision yield no region.
    pub fn from_record(record: &LocationRecord) -> Option<Self> {
        if record.subdivision_name.is_empty() {
            return None;
        }
        Some(Region {
            country: Country::from_record(record),
            name: record.subdivision_name.clone(),
        })
    }
}

impl City {
    pub fn from_record(record: &LocationRecord) -> Self {
        City {
            country: Country::from_record(record),
            region: Region::from_record(record),
            name: record.city_name.clone(),
        }
    }
}

// Canonical display form: `name[, region][, country][, continent]`,
// omitting absent ancestors.

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.continent)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.country)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}, {}, {}", self.name, region.name, self.country),
            None => write!(f, "{}, {}", self.name, self.country),
        }
    }
}

/// Renders a resolved list to its canonical display strings.
pub fn render_all<T: fmt::Display>(items: &[T]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
