//! University Directory Use Cases

use std::sync::Arc;

use chrono::Utc;
use kernel::id::UniversityId;

use crate::domain::entity::University;
use crate::domain::repository::{UniversityFilter, UniversityRepository};
use crate::error::{CatalogError, CatalogResult};

/// Incoming university fields, shared by create and update
#[derive(Debug, Clone)]
pub struct UniversityDraft {
    pub name: String,
    pub country: String,
    pub city: Option<String>,
    pub programs: Vec<String>,
    pub cost_estimate: Option<i64>,
    pub website: Option<String>,
}

impl UniversityDraft {
    fn validate(&self) -> CatalogResult<()> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::Validation("Name is required".to_string()));
        }
        if self.country.trim().is_empty() {
            return Err(CatalogError::Validation("Country is required".to_string()));
        }
        if self.cost_estimate.is_some_and(|c| c < 0) {
            return Err(CatalogError::Validation(
                "Cost estimate cannot be negative".to_string(),
            ));
        }
        Ok(())
    }

    fn apply_to(self, university: &mut University) {
        university.name = self.name.trim().to_string();
        university.country = self.country.trim().to_string();
        university.city = self.city;
        university.programs = self.programs;
        university.cost_estimate = self.cost_estimate;
        university.website = self.website;
    }
}

pub struct CreateUniversityUseCase<U> {
    universities: Arc<U>,
}

impl<U: UniversityRepository> CreateUniversityUseCase<U> {
    pub fn new(universities: Arc<U>) -> Self {
        Self { universities }
    }

    pub async fn execute(&self, draft: UniversityDraft) -> CatalogResult<University> {
        draft.validate()?;

        let now = Utc::now();
        let mut university = University {
            id: UniversityId::new(),
            name: String::new(),
            country: String::new(),
            city: None,
            programs: vec![],
            cost_estimate: None,
            website: None,
            created_at: now,
            updated_at: now,
        };
        draft.apply_to(&mut university);

        self.universities.create(&university).await?;

        tracing::info!(university_id = %university.id, "University created");

        Ok(university)
    }
}

pub struct GetUniversityUseCase<U> {
    universities: Arc<U>,
}

impl<U: UniversityRepository> GetUniversityUseCase<U> {
    pub fn new(universities: Arc<U>) -> Self {
        Self { universities }
    }

    pub async fn execute(&self, id: &UniversityId) -> CatalogResult<University> {
        self.universities
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::UniversityNotFound)
    }
}

pub struct ListUniversitiesUseCase<U> {
    universities: Arc<U>,
}

impl<U: UniversityRepository> ListUniversitiesUseCase<U> {
    pub fn new(universities: Arc<U>) -> Self {
        Self { universities }
    }

    pub async fn execute(&self, filter: &UniversityFilter) -> CatalogResult<Vec<University>> {
        self.universities.list(filter).await
    }
}

pub struct UpdateUniversityUseCase<U> {
    universities: Arc<U>,
}

impl<U: UniversityRepository> UpdateUniversityUseCase<U> {
    pub fn new(universities: Arc<U>) -> Self {
        Self { universities }
    }

    pub async fn execute(
        &self,
        id: &UniversityId,
        draft: UniversityDraft,
    ) -> CatalogResult<University> {
        draft.validate()?;

        let mut university = self
            .universities
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::UniversityNotFound)?;

        draft.apply_to(&mut university);
        university.touch();
        self.universities.update(&university).await?;

        Ok(university)
    }
}

pub struct DeleteUniversityUseCase<U> {
    universities: Arc<U>,
}

impl<U: UniversityRepository> DeleteUniversityUseCase<U> {
    pub fn new(universities: Arc<U>) -> Self {
        Self { universities }
    }

    pub async fn execute(&self, id: &UniversityId) -> CatalogResult<()> {
        self.universities.delete(id).await
    }
}
