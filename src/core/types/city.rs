//! City record
//!
//! The wire shape is a flat JSON object with `name`, an optional `country` and
//! at most one of `state` / `province`. In memory the subdivision is a proper
//! enum. Missing columns are left for the store's own constraints to judge.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Administrative subdivision of a country, if the record has one
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Subdivision {
    /// US-style state
    State(String),
    /// Canadian-style province
    Province(String),
}

impl Subdivision {
    pub fn name(&self) -> &str {
        match self {
            Subdivision::State(name) | Subdivision::Province(name) => name,
        }
    }
}

/// A single row of the `cities` table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CityRow", into = "CityRow")]
pub struct CityRecord {
    pub name: String,
    pub country: Option<String>,
    pub subdivision: Option<Subdivision>,
}

impl CityRecord {
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: Some(country.into()),
            subdivision: None,
        }
    }

    /// A record with no country, e.g. a city-state or an incomplete data file row
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: None,
            subdivision: None,
        }
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.subdivision = Some(Subdivision::State(state.into()));
        self
    }

    pub fn with_province(mut self, province: impl Into<String>) -> Self {
        self.subdivision = Some(Subdivision::Province(province.into()));
        self
    }

    pub fn state(&self) -> Option<&str> {
        match &self.subdivision {
            Some(Subdivision::State(s)) => Some(s),
            _ => None,
        }
    }

    pub fn province(&self) -> Option<&str> {
        match &self.subdivision {
            Some(Subdivision::Province(p)) => Some(p),
            _ => None,
        }
    }

    /// The conflict key used by the store: (`name`, `country`)
    pub fn key(&self) -> (&str, Option<&str>) {
        (&self.name, self.country.as_deref())
    }
}

impl fmt::Display for CityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(sub) = &self.subdivision {
            write!(f, ", {}", sub.name())?;
        }
        if let Some(country) = &self.country {
            write!(f, ", {}", country)?;
        }
        Ok(())
    }
}

/// Flat serde representation
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CityRow {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    province: Option<String>,
}

impl TryFrom<CityRow> for CityRecord {
    type Error = String;

    fn try_from(row: CityRow) -> Result<Self, Self::Error> {
        let subdivision = match (row.state, row.province) {
            (Some(_), Some(_)) => {
                return Err(format!(
                    "city '{}' has both a state and a province",
                    row.name
                ));
            }
            (Some(state), None) => Some(Subdivision::State(state)),
            (None, Some(province)) => Some(Subdivision::Province(province)),
            (None, None) => None,
        };

        Ok(CityRecord {
            name: row.name,
            country: row.country,
            subdivision,
        })
    }
}

impl From<CityRecord> for CityRow {
    fn from(record: CityRecord) -> Self {
        let (state, province) = match record.subdivision {
            Some(Subdivision::State(s)) => (Some(s), None),
            Some(Subdivision::Province(p)) => (None, Some(p)),
            None => (None, None),
        };
        CityRow {
            name: record.name,
            country: record.country,
            state,
            province,
        }
    }
}
