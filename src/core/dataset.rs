//! Built-in city dataset and file loading
//!
//! The default list is materialised once on first access and never mutated.
//! A replacement list can be read from a JSON or YAML file instead.

use crate::core::types::CityRecord;
use crate::utils::error::{Result, SeederError};
use once_cell::sync::Lazy;
use std::path::Path;
use tracing::{debug, info};

/// Number of records in the built-in list
pub const BUILTIN_CITY_COUNT: usize = 83;

static CITIES: Lazy<Vec<CityRecord>> = Lazy::new(|| {
    vec![
        city("Amsterdam", "Netherlands"),
        city("Athens", "Greece"),
        city("Atlanta", "United States").with_state("Georgia"),
        city("Auckland", "New Zealand"),
        city("Austin", "United States").with_state("Texas"),
        city("Bangkok", "Thailand"),
        city("Barcelona", "Spain"),
        city("Beijing", "China"),
        city("Berlin", "Germany"),
        city("Boston", "United States").with_state("Massachusetts"),
        city("Brussels", "Belgium"),
        city("Buenos Aires", "Argentina"),
        city("Cairo", "Egypt"),
        city("Cape Town", "South Africa"),
        city("Chicago", "United States").with_state("Illinois"),
        city("Copenhagen", "Denmark"),
        city("Dallas", "United States").with_state("Texas"),
        city("Delhi", "India"),
        city("Denver", "United States").with_state("Colorado"),
        city("Detroit", "United States").with_state("Michigan"),
        city("Dubai", "United Arab Emirates"),
        city("Dublin", "Ireland"),
        city("Edinburgh", "United Kingdom"),
        city("Frankfurt", "Germany"),
        city("Glasgow", "United Kingdom"),
        city("Hamburg", "Germany"),
        city("Helsinki", "Finland"),
        city("Hong Kong", "China"),
        city("Houston", "United States").with_state("Texas"),
        city("Istanbul", "Turkey"),
        city("Jakarta", "Indonesia"),
        city("Johannesburg", "South Africa"),
        city("Kuala Lumpur", "Malaysia"),
        city("Kyoto", "Japan"),
        city("Las Vegas", "United States").with_state("Nevada"),
        city("Lisbon", "Portugal"),
        city("London", "United Kingdom"),
        city("Los Angeles", "United States").with_state("California"),
        city("Madrid", "Spain"),
        city("Manchester", "United Kingdom"),
        city("Manila", "Philippines"),
        city("Melbourne", "Australia"),
        city("Mexico City", "Mexico"),
        city("Miami", "United States").with_state("Florida"),
        city("Milan", "Italy"),
        city("Montreal", "Canada").with_province("Quebec"),
        city("Moscow", "Russia"),
        city("Mumbai", "India"),
        city("Munich", "Germany"),
        city("Nashville", "United States").with_state("Tennessee"),
        city("New Orleans", "United States").with_state("Louisiana"),
        city("New York", "United States").with_state("New York"),
        city("Osaka", "Japan"),
        city("Oslo", "Norway"),
        city("Ottawa", "Canada").with_province("Ontario"),
        city("Paris", "France"),
        city("Philadelphia", "United States").with_state("Pennsylvania"),
        city("Phoenix", "United States").with_state("Arizona"),
        city("Portland", "United States").with_state("Oregon"),
        city("Prague", "Czech Republic"),
        city("Rio de Janeiro", "Brazil"),
        city("Rome", "Italy"),
        city("San Diego", "United States").with_state("California"),
        city("San Francisco", "United States").with_state("California"),
        city("Santiago", "Chile"),
        city("São Paulo", "Brazil"),
        city("Seattle", "United States").with_state("Washington"),
        city("Seoul", "South Korea"),
        city("Shanghai", "China"),
        city("Singapore", "Singapore"),
        city("Stockholm", "Sweden"),
        city("Sydney", "Australia"),
        city("Taipei", "Taiwan"),
        city("Tel Aviv", "Israel"),
        city("Tokyo", "Japan"),
        city("Toronto", "Canada").with_province("Ontario"),
        city("Vancouver", "Canada").with_province("British Columbia"),
        city("Venice", "Italy"),
        city("Vienna", "Austria"),
        city("Warsaw", "Poland"),
        city("Washington D.C.", "United States"),
        city("Wellington", "New Zealand"),
        city("Zurich", "Switzerland"),
    ]
});

fn city(name: &str, country: &str) -> CityRecord {
    CityRecord::new(name, country)
}

/// The built-in seed list, in insertion order
pub fn builtin_cities() -> &'static [CityRecord] {
    &CITIES
}

/// Load a list of cities from `path`.
///
/// The format is picked from the extension: `.json`, `.yaml` or `.yml`.
/// The file must contain a top-level array of flat city rows.
pub fn load_cities_from_file(path: impl AsRef<Path>) -> Result<Vec<CityRecord>> {
    let path = path.as_ref();
    debug!("Loading cities from {}", path.display());

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    let content = std::fs::read_to_string(path)?;
    let cities: Vec<CityRecord> = match extension.as_deref() {
        Some("json") => serde_json::from_str(&content)?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
        _ => {
            return Err(SeederError::config(format!(
                "Unsupported data file '{}': expected .json, .yaml or .yml",
                path.display()
            )));
        }
    };

    info!("Loaded {} cities from {}", cities.len(), path.display());
    Ok(cities)
}
