// crates/locex-core/src/resolve.rs

//! # Disambiguation engine
//!
//! Four cascading stages, continents -> countries -> regions -> cities. Each
//! stage partitions its input into resolved entities and a remainder that
//! feeds the next stage. The order is load-bearing: coarse entities resolved
//! early become the containment context that disambiguates lexically
//! identical finer names ("Berlin, Germany" vs. the nine US Berlins).
//!
//! Stages are pure functions over `(store, candidates, context)`; there is
//! no shared mutable state between invocations.

use crate::acronym::resolve_acronym;
use crate::error::Result;
use crate::model::{City, Continent, Country, Region};
use crate::store::{Column, GazetteerStore};
use crate::text::fold_key;
use std::collections::BTreeSet;
use tracing::debug;

/// The four output lists of one resolution run, each sorted ascending per
/// the entity total order and deduplicated by structural equality.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedLocations {
    pub continents: Vec<Continent>,
    pub countries: Vec<Country>,
    pub regions: Vec<Region>,
    pub cities: Vec<City>,
}

impl ResolvedLocations {
    /// True when no stage resolved anything.
    pub fn is_empty(&self) -> bool {
        self.continents.is_empty()
            && self.countries.is_empty()
            && self.regions.is_empty()
            && self.cities.is_empty()
    }
}

// Empty and whitespace-only candidates never reach the store: gazetteer rows
// legitimately carry empty name cells, and an empty-string query would match
// them all.
fn is_blank(candidate: &str) -> bool {
    fold_key(candidate).is_empty()
}

fn push_remaining(remainder: &mut Vec<String>, candidate: &str) {
    if !remainder.iter().any(|p| p == candidate) {
        remainder.push(candidate.to_string());
    }
}

/// Stage 1: continent literals.
///
/// A string naming a continent is unambiguous by construction, so every
/// distinct match is accepted without any containment filter.
pub fn resolve_continents(
    store: &GazetteerStore,
    candidates: &[String],
) -> Result<(BTreeSet<Continent>, Vec<String>)> {
    let mut resolved = BTreeSet::new();
    let mut remainder = Vec::new();

    for place in candidates {
        if is_blank(place) {
            push_remaining(&mut remainder, place);
            continue;
        }
        let records = store.fetch_all(Column::ContinentName, place)?;
        if records.is_empty() {
            push_remaining(&mut remainder, place);
        } else {
            resolved.extend(records.iter().map(Continent::from_record));
        }
    }

    debug!(
        resolved = resolved.len(),
        remaining = remainder.len(),
        "continent stage done"
    );
    Ok((resolved, remainder))
}

/// Stage 2: countries, with acronym resolution and the on-continent filter.
///
/// Runs over the original candidate list, not stage 1's remainder: country
/// mentions are looked up independently of whether a continent literal also
/// appeared in the text.
pub fn resolve_countries(
    store: &GazetteerStore,
    candidates: &[String],
    continents: &BTreeSet<Continent>,
) -> Result<(BTreeSet<Country>, Vec<String>)> {
    let mut resolved = BTreeSet::new();
    let mut remainder = Vec::new();

    for place in candidates {
        if is_blank(place) {
            push_remaining(&mut remainder, place);
            continue;
        }

        let canonical = resolve_acronym(store, place)?;
        let query = canonical.as_deref().unwrap_or(place);
        let records = store.fetch_all(Column::CountryName, query)?;
        let potential: BTreeSet<Country> = records.iter().map(Country::from_record).collect();

        if potential.is_empty() {
            push_remaining(&mut remainder, place);
            continue;
        }

        let on_continent: BTreeSet<Country> = potential
            .iter()
            .filter(|country| continents.contains(&country.continent))
            .cloned()
            .collect();

        if on_continent.is_empty() {
            resolved.extend(potential);
        } else {
            resolved.extend(on_continent);
        }
    }

    debug!(
        resolved = resolved.len(),
        remaining = remainder.len(),
        "country stage done"
    );
    Ok((resolved, remainder))
}

/// Stage 3: regions, with a three-tier containment filter.
///
/// Tiers apply first-non-empty-wins: (a) region's country already resolved,
/// (b) region's continent already resolved, (c) keep all matches. The most
/// specific available context wins, but a region mention never disappears
/// merely because no country co-occurred in the text.
pub fn resolve_regions(
    store: &GazetteerStore,
    candidates: &[String],
    continents: &BTreeSet<Continent>,
    countries: &BTreeSet<Country>,
) -> Result<(BTreeSet<Region>, Vec<String>)> {
    let mut resolved = BTreeSet::new();
    let mut remainder = Vec::new();

    for place in candidates {
        if is_blank(place) {
            push_remaining(&mut remainder, place);
            continue;
        }

        let records = store.fetch_all(Column::SubdivisionName, place)?;
        let potential: Vec<Region> = records.iter().filter_map(Region::from_record).collect();

        if potential.is_empty() {
            push_remaining(&mut remainder, place);
            continue;
        }

        let in_country: Vec<Region> = potential
            .iter()
            .filter(|region| countries.contains(&region.country))
            .cloned()
            .collect();
        if !in_country.is_empty() {
            resolved.extend(in_country);
            continue;
        }

        let on_continent: Vec<Region> = potential
            .iter()
            .filter(|region| continents.contains(&region.country.continent))
            .cloned()
            .collect();
        if !on_continent.is_empty() {
            resolved.extend(on_continent);
        } else {
            resolved.extend(potential);
        }
    }

    debug!(
        resolved = resolved.len(),
        remaining = remainder.len(),
        "region stage done"
    );
    Ok((resolved, remainder))
}

/// Stage 4: cities, with a four-tier containment filter (region, country,
/// continent, unfiltered). Candidates no stage resolves are the final
/// discard.
pub fn resolve_cities(
    store: &GazetteerStore,
    candidates: &[String],
    continents: &BTreeSet<Continent>,
    countries: &BTreeSet<Country>,
    regions: &BTreeSet<Region>,
) -> Result<(BTreeSet<City>, Vec<String>)> {
    let mut resolved = BTreeSet::new();
    let mut remainder = Vec::new();

    for place in candidates {
        if is_blank(place) {
            push_remaining(&mut remainder, place);
            continue;
        }

        let records = store.fetch_all(Column::CityName, place)?;
        let potential: Vec<City> = records.iter().map(City::from_record).collect();

        if potential.is_empty() {
            push_remaining(&mut remainder, place);
            continue;
        }

        let in_region: Vec<City> = potential
            .iter()
            .filter(|city| city.region.as_ref().is_some_and(|r| regions.contains(r)))
            .cloned()
            .collect();
        if !in_region.is_empty() {
            resolved.extend(in_region);
            continue;
        }

        let in_country: Vec<City> = potential
            .iter()
            .filter(|city| countries.contains(&city.country))
            .cloned()
            .collect();
        if !in_country.is_empty() {
            resolved.extend(in_country);
            continue;
        }

        let on_continent: Vec<City> = potential
            .iter()
            .filter(|city| continents.contains(&city.country.continent))
            .cloned()
            .collect();
        if !on_continent.is_empty() {
            resolved.extend(on_continent);
        } else {
            resolved.extend(potential);
        }
    }

    debug!(
        resolved = resolved.len(),
        remaining = remainder.len(),
        "city stage done"
    );
    Ok((resolved, remainder))
}

/// Runs the full cascade over a candidate list.
///
/// Stage 3's input is the intersection of stage 1's and stage 2's
/// remainders: a candidate resolved as a continent or country is never
/// re-queried as a region or city.
pub fn resolve(store: &GazetteerStore, candidates: &[String]) -> Result<ResolvedLocations> {
    let (continents, after_continents) = resolve_continents(store, candidates)?;
    let (countries, after_countries) = resolve_countries(store, candidates, &continents)?;

    let remaining: Vec<String> = after_countries
        .into_iter()
        .filter(|place| after_continents.contains(place))
        .collect();

    let (regions, remaining) = resolve_regions(store, &remaining, &continents, &countries)?;
    let (cities, unresolved) =
        resolve_cities(store, &remaining, &continents, &countries, &regions)?;
    debug!(discarded = unresolved.len(), "cascade done");

    Ok(ResolvedLocations {
        continents: continents.into_iter().collect(),
        countries: countries.into_iter().collect(),
        regions: regions.into_iter().collect(),
        cities: cities.into_iter().collect(),
    })
}
