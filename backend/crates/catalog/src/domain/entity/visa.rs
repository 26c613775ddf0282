//! Visa Directory Entity
//!
//! Structured visa information per country and visa type: requirements,
//! ordered application steps, fees, and a documents checklist.

use chrono::{DateTime, Utc};
use kernel::id::VisaId;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::VisaType;

/// Application fee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisaFees {
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One entry in the required-documents checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub name: String,
    pub required: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// One visa directory entry
#[derive(Debug, Clone, PartialEq)]
pub struct Visa {
    pub id: VisaId,
    pub country: String,
    pub visa_type: VisaType,
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    /// Application steps in order
    pub instructions: Vec<String>,
    pub processing_time: String,
    pub fees: Option<VisaFees>,
    pub eligibility: Vec<String>,
    pub documents: Vec<ChecklistItem>,
    pub application_url: Option<String>,
    pub additional_info: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Visa {
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
