//! Post Kind

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown post kind: {0}")]
pub struct UnknownPostKind(pub String);

/// Guide post category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum PostKind {
    /// Statement-of-purpose guidance
    #[display("SOP")]
    #[serde(rename = "SOP")]
    Sop,
    /// Visa process guidance
    #[display("VISA")]
    #[serde(rename = "VISA")]
    Visa,
}

impl PostKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostKind::Sop => "SOP",
            PostKind::Visa => "VISA",
        }
    }

    pub fn parse(code: &str) -> Result<Self, UnknownPostKind> {
        match code {
            "SOP" => Ok(PostKind::Sop),
            "VISA" => Ok(PostKind::Visa),
            other => Err(UnknownPostKind(other.to_string())),
        }
    }
}
