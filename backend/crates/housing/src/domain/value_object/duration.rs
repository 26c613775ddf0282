//! Lease Duration

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown lease duration: {0}")]
pub struct UnknownDuration(pub String);

/// Offered lease length; codes match the listing form verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, Default)]
pub enum LeaseDuration {
    #[display("1 semester")]
    #[serde(rename = "1 semester")]
    OneSemester,
    #[display("1 year")]
    #[serde(rename = "1 year")]
    OneYear,
    #[display("2 years")]
    #[serde(rename = "2 years")]
    TwoYears,
    #[default]
    #[display("Flexible")]
    Flexible,
}

impl LeaseDuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaseDuration::OneSemester => "1 semester",
            LeaseDuration::OneYear => "1 year",
            LeaseDuration::TwoYears => "2 years",
            LeaseDuration::Flexible => "Flexible",
        }
    }

    pub fn parse(code: &str) -> Result<Self, UnknownDuration> {
        match code {
            "1 semester" => Ok(LeaseDuration::OneSemester),
            "1 year" => Ok(LeaseDuration::OneYear),
            "2 years" => Ok(LeaseDuration::TwoYears),
            "Flexible" => Ok(LeaseDuration::Flexible),
            other => Err(UnknownDuration(other.to_string())),
        }
    }
}
