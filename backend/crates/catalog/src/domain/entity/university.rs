//! University Entity

use chrono::{DateTime, Utc};
use kernel::id::UniversityId;

/// A directory entry for a study destination
#[derive(Debug, Clone, PartialEq)]
pub struct University {
    pub id: UniversityId,
    pub name: String,
    pub country: String,
    pub city: Option<String>,
    /// Program types on offer, e.g. "Masters", "PhD"
    pub programs: Vec<String>,
    /// Rough yearly cost in whole currency units
    pub cost_estimate: Option<i64>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl University {
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Whether any offered program matches, case-insensitively
    pub fn offers_program(&self, program: &str) -> bool {
        self.programs
            .iter()
            .any(|p| p.eq_ignore_ascii_case(program.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_match_is_case_insensitive() {
        let now = Utc::now();
        let university = University {
            id: UniversityId::new(),
            name: "TU Berlin".to_string(),
            country: "Germany".to_string(),
            city: Some("Berlin".to_string()),
            programs: vec!["Masters".to_string(), "PhD".to_string()],
            cost_estimate: Some(1500),
            website: None,
            created_at: now,
            updated_at: now,
        };
        assert!(university.offers_program("masters"));
        assert!(university.offers_program(" PHD "));
        assert!(!university.offers_program("Bachelors"));
    }
}
