mod lenient;

pub use lenient::{parse_leading_int, to_count};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    #[default]
    Apartment,
    Villa,
    Commercial,
}

impl PropertyType {
    pub const ALL: [PropertyType; 3] = [Self::Apartment, Self::Villa, Self::Commercial];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::Villa => "villa",
            Self::Commercial => "commercial",
        }
    }
}

/// Listing availability
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    #[default]
    Available,
    Sold,
    Rented,
}

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 3] = [Self::Available, Self::Sold, Self::Rented];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Sold => "sold",
            Self::Rented => "rented",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl FromStr for PropertyType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "property type",
                value: s.to_string(),
                expected: "apartment, villa, commercial",
            })
    }
}

impl FromStr for PropertyStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "status",
                value: s.to_string(),
                expected: "available, sold, rented",
            })
    }
}

/// Type filter applied to the listing view. `All` passes every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(PropertyType),
}

impl TypeFilter {
    pub fn matches(&self, property_type: PropertyType) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == property_type,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<PropertyType>().map(Self::Only).map_err(|_| UnknownVariant {
            kind: "type filter",
            value: s.to_string(),
            expected: "all, apartment, villa, commercial",
        })
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(t) => t.fmt(f),
        }
    }
}

/// Core property data model, as exchanged with the webhook backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(rename = "type", deserialize_with = "lenient::variant")]
    pub property_type: PropertyType,
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: String,
    /// `None` when the price entered in the form was not a number; serialized as `null`.
    #[serde(default, deserialize_with = "lenient::optional_int")]
    pub price: Option<i64>,
    #[serde(default, deserialize_with = "lenient::variant_or_default")]
    pub status: PropertyStatus,
    #[serde(default, deserialize_with = "lenient::count")]
    pub bedrooms: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub bathrooms: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub area: u32,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    /// Comma separated free text
    #[serde(default, deserialize_with = "lenient::text")]
    pub features: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub available_from: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_rental: bool,
}

impl Property {
    /// Individual features, split on commas and trimmed
    pub fn feature_list(&self) -> Vec<&str> {
        self.features
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect()
    }
}
