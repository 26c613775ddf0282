//! Property Category

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown property category: {0}")]
pub struct UnknownCategory(pub String);

/// Listing category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum PropertyCategory {
    #[display("Apartment")]
    Apartment,
    #[display("Room")]
    Room,
    #[display("Studio")]
    Studio,
}

impl PropertyCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyCategory::Apartment => "Apartment",
            PropertyCategory::Room => "Room",
            PropertyCategory::Studio => "Studio",
        }
    }

    pub fn parse(code: &str) -> Result<Self, UnknownCategory> {
        match code {
            "Apartment" => Ok(PropertyCategory::Apartment),
            "Room" => Ok(PropertyCategory::Room),
            "Studio" => Ok(PropertyCategory::Studio),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_codes_roundtrip() {
        for category in [
            PropertyCategory::Apartment,
            PropertyCategory::Room,
            PropertyCategory::Studio,
        ] {
            assert_eq!(PropertyCategory::parse(category.as_str()), Ok(category));
        }
        assert!(PropertyCategory::parse("Villa").is_err());
    }
}
