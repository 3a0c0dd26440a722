// crates/locex-core/src/text.rs
use once_cell::sync::Lazy;
use regex::Regex;

/// Convert a string into a folded key suitable for matching.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Gdańsk` -> `Gdansk`)
/// 2\) Normalize to lowercase
///
/// Every gazetteer lookup folds both the query value and (at bootstrap time)
/// the stored shadow column with this function, so "Gdańsk" matches "gdansk".
///
/// # Examples
///
/// ```rust
/// use locex_core::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Gdańsk"), "gdansk");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and lowercasing.
///
/// # Examples
///
/// ```rust
/// use locex_core::equals_folded;
///
/// assert!(equals_folded("Łódź", "lodz"));
/// assert!(equals_folded("MÜNCHEN", "munchen"));
/// assert!(!equals_folded("Berlin", "Paris"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

static THE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(^|\s)the(\s|$)").unwrap());

static SUBLOCATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(west|south|north|east)(ern)?").unwrap());

/// Removes a leading or trailing "the" token (word-boundary, any case).
///
/// "The USA" becomes "USA"; a "the" embedded in a longer word is untouched.
pub fn strip_the(s: &str) -> String {
    THE_TOKEN.replace_all(s, " ").trim().to_string()
}

/// Strips directional/sublocation qualifiers from a candidate place name,
/// with or without the "-ern" suffix: "Western Europe" -> "Europe".
pub fn strip_sublocation(s: &str) -> String {
    SUBLOCATION.replace_all(s, "").trim().to_string()
}
