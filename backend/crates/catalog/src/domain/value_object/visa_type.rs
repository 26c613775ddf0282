//! Visa Type

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown visa type: {0}")]
pub struct UnknownVisaType(pub String);

/// Visa category in the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum VisaType {
    Student,
    Tourist,
    Work,
    #[display("Permanent Resident")]
    #[serde(rename = "Permanent Resident")]
    PermanentResident,
}

impl VisaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisaType::Student => "Student",
            VisaType::Tourist => "Tourist",
            VisaType::Work => "Work",
            VisaType::PermanentResident => "Permanent Resident",
        }
    }

    pub fn parse(code: &str) -> Result<Self, UnknownVisaType> {
        match code {
            "Student" => Ok(VisaType::Student),
            "Tourist" => Ok(VisaType::Tourist),
            "Work" => Ok(VisaType::Work),
            "Permanent Resident" => Ok(VisaType::PermanentResident),
            other => Err(UnknownVisaType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_codes_roundtrip() {
        for visa_type in [
            VisaType::Student,
            VisaType::Tourist,
            VisaType::Work,
            VisaType::PermanentResident,
        ] {
            assert_eq!(VisaType::parse(visa_type.as_str()), Ok(visa_type));
        }
        assert!(VisaType::parse("student").is_err());
    }
}
