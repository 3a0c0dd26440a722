// crates/locex-core/src/lib.rs

pub mod acronym;
pub mod error;
pub mod extract;
pub mod model;
pub mod ner;
pub mod resolve;
pub mod store;
pub mod text;

// Re-exports
pub use crate::error::{LocexError, Result};
pub use crate::extract::Extractor;
pub use crate::model::{City, Continent, Country, LocationRecord, Region};
pub use crate::ner::{EntityRecognizer, HeuristicRecognizer};
pub use crate::resolve::{resolve, ResolvedLocations};
pub use crate::store::{Column, GazetteerStore};
pub use crate::text::{equals_folded, fold_key};
