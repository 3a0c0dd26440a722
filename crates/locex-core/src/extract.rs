// crates/locex-core/src/extract.rs
use crate::error::Result;
use crate::model::render_all;
use crate::ner::{EntityRecognizer, HeuristicRecognizer};
use crate::resolve::{resolve, resolve_countries, ResolvedLocations};
use crate::store::GazetteerStore;
use crate::text::strip_sublocation;
use std::collections::BTreeSet;

/// Orchestrates NER output, sublocation cleanup, the disambiguation cascade
/// and optional string rendering. Thin by design: all the work happens in
/// [`crate::resolve`] and in the recognizer behind the seam.
pub struct Extractor<R: EntityRecognizer> {
    store: GazetteerStore,
    recognizer: R,
}

impl Extractor<HeuristicRecognizer> {
    /// An extractor backed by the bundled heuristic recognizer.
    pub fn new(store: GazetteerStore) -> Self {
        Extractor::with_recognizer(store, HeuristicRecognizer::new())
    }
}

impl<R: EntityRecognizer> Extractor<R> {
    pub fn with_recognizer(store: GazetteerStore, recognizer: R) -> Self {
        Extractor { store, recognizer }
    }

    pub fn store(&self) -> &GazetteerStore {
        &self.store
    }

    /// Raw candidates from the recognizer, with directional qualifiers
    /// stripped ("Western Europe" -> "Europe").
    pub fn extract_places(&self, text: &str) -> Vec<String> {
        self.recognizer
            .find_entities(text)
            .iter()
            .map(|place| strip_sublocation(place))
            .collect()
    }

    /// One cascade run over an already-extracted candidate list.
    pub fn find_locations(&self, places: &[String]) -> Result<ResolvedLocations> {
        resolve(&self.store, places)
    }

    /// Full pipeline: NER, cleanup, cascade.
    pub fn extract_locations(&self, text: &str) -> Result<ResolvedLocations> {
        let places = self.extract_places(text);
        self.find_locations(&places)
    }

    /// [`Extractor::extract_locations`] rendered to canonical display
    /// strings, one sorted list per hierarchy level.
    #[allow(clippy::type_complexity)]
    pub fn extract_location_strings(
        &self,
        text: &str,
    ) -> Result<(Vec<String>, Vec<String>, Vec<String>, Vec<String>)> {
        let locations = self.extract_locations(text)?;
        Ok((
            render_all(&locations.continents),
            render_all(&locations.countries),
            render_all(&locations.regions),
            render_all(&locations.cities),
        ))
    }

    /// True when the country stage alone resolves the name. A single bare
    /// candidate gets no containment context.
    pub fn is_country(&self, name: &str) -> Result<bool> {
        let candidates = [name.to_string()];
        let (countries, _) = resolve_countries(&self.store, &candidates, &BTreeSet::new())?;
        Ok(!countries.is_empty())
    }

    /// True when any stage of the full cascade resolves the name.
    pub fn is_location(&self, name: &str) -> Result<bool> {
        let found = self.find_locations(&[name.to_string()])?;
        Ok(!found.is_empty())
    }
}
