//! Verification Request Status

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown verification status: {0}")]
pub struct UnknownStatus(pub String);

/// Review status of a verification request
///
/// A request is born `Pending`; a review moves it to `Approved` or
/// `Rejected` exactly once. Terminal states never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    #[display("pending")]
    Pending,
    #[display("approved")]
    Approved,
    #[display("rejected")]
    Rejected,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Approved => "approved",
            VerificationStatus::Rejected => "rejected",
        }
    }

    pub fn parse(code: &str) -> Result<Self, UnknownStatus> {
        match code {
            "pending" => Ok(VerificationStatus::Pending),
            "approved" => Ok(VerificationStatus::Approved),
            "rejected" => Ok(VerificationStatus::Rejected),
            other => Err(UnknownStatus(other.to_string())),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, VerificationStatus::Pending)
    }
}

/// Admin list filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Pending,
    All,
}

impl StatusFilter {
    /// Parse the `status` query parameter; anything but "all" means pending
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some("all") => StatusFilter::All,
            _ => StatusFilter::Pending,
        }
    }
}
