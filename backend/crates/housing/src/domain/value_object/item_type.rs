//! Bookmarkable Item Type

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown bookmark item type: {0}")]
pub struct UnknownItemType(pub String);

/// What a bookmark points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemType {
    #[display("POST")]
    Post,
    #[display("PROPERTY")]
    Property,
    #[display("UNIVERSITY")]
    University,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Post => "POST",
            ItemType::Property => "PROPERTY",
            ItemType::University => "UNIVERSITY",
        }
    }

    pub fn parse(code: &str) -> Result<Self, UnknownItemType> {
        match code {
            "POST" => Ok(ItemType::Post),
            "PROPERTY" => Ok(ItemType::Property),
            "UNIVERSITY" => Ok(ItemType::University),
            other => Err(UnknownItemType(other.to_string())),
        }
    }
}
