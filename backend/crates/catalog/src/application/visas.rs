//! Visa Directory Use Cases

use std::sync::Arc;

use chrono::Utc;
use kernel::id::VisaId;

use crate::domain::entity::{ChecklistItem, Visa, VisaFees};
use crate::domain::repository::{VisaFilter, VisaRepository};
use crate::domain::value_object::VisaType;
use crate::error::{CatalogError, CatalogResult};

/// Incoming visa fields, shared by create and update
#[derive(Debug, Clone)]
pub struct VisaDraft {
    pub country: String,
    pub visa_type: VisaType,
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub instructions: Vec<String>,
    pub processing_time: String,
    pub fees: Option<VisaFees>,
    pub eligibility: Vec<String>,
    pub documents: Vec<ChecklistItem>,
    pub application_url: Option<String>,
    pub additional_info: Option<String>,
}

impl VisaDraft {
    fn validate(&self) -> CatalogResult<()> {
        if self.country.trim().is_empty() {
            return Err(CatalogError::Validation("Country is required".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(CatalogError::Validation("Title is required".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(CatalogError::Validation(
                "Description is required".to_string(),
            ));
        }
        if self.processing_time.trim().is_empty() {
            return Err(CatalogError::Validation(
                "Processing time is required".to_string(),
            ));
        }
        if self.fees.as_ref().is_some_and(|f| f.amount < 0) {
            return Err(CatalogError::Validation(
                "Fee amount cannot be negative".to_string(),
            ));
        }
        Ok(())
    }

    fn apply_to(self, visa: &mut Visa) {
        visa.country = self.country.trim().to_string();
        visa.visa_type = self.visa_type;
        visa.title = self.title.trim().to_string();
        visa.description = self.description;
        visa.requirements = self.requirements;
        visa.instructions = self.instructions;
        visa.processing_time = self.processing_time;
        visa.fees = self.fees;
        visa.eligibility = self.eligibility;
        visa.documents = self.documents;
        visa.application_url = self.application_url;
        visa.additional_info = self.additional_info;
    }
}

pub struct CreateVisaUseCase<V> {
    visas: Arc<V>,
}

impl<V: VisaRepository> CreateVisaUseCase<V> {
    pub fn new(visas: Arc<V>) -> Self {
        Self { visas }
    }

    pub async fn execute(&self, draft: VisaDraft) -> CatalogResult<Visa> {
        draft.validate()?;

        let now = Utc::now();
        let mut visa = Visa {
            id: VisaId::new(),
            country: String::new(),
            visa_type: draft.visa_type,
            title: String::new(),
            description: String::new(),
            requirements: vec![],
            instructions: vec![],
            processing_time: String::new(),
            fees: None,
            eligibility: vec![],
            documents: vec![],
            application_url: None,
            additional_info: None,
            created_at: now,
            updated_at: now,
        };
        draft.apply_to(&mut visa);

        self.visas.create(&visa).await?;

        tracing::info!(visa_id = %visa.id, country = %visa.country, "Visa entry created");

        Ok(visa)
    }
}

pub struct GetVisaUseCase<V> {
    visas: Arc<V>,
}

impl<V: VisaRepository> GetVisaUseCase<V> {
    pub fn new(visas: Arc<V>) -> Self {
        Self { visas }
    }

    pub async fn execute(&self, id: &VisaId) -> CatalogResult<Visa> {
        self.visas
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::VisaNotFound)
    }
}

pub struct ListVisasUseCase<V> {
    visas: Arc<V>,
}

impl<V: VisaRepository> ListVisasUseCase<V> {
    pub fn new(visas: Arc<V>) -> Self {
        Self { visas }
    }

    pub async fn execute(&self, filter: &VisaFilter) -> CatalogResult<Vec<Visa>> {
        self.visas.list(filter).await
    }
}

pub struct UpdateVisaUseCase<V> {
    visas: Arc<V>,
}

impl<V: VisaRepository> UpdateVisaUseCase<V> {
    pub fn new(visas: Arc<V>) -> Self {
        Self { visas }
    }

    pub async fn execute(&self, id: &VisaId, draft: VisaDraft) -> CatalogResult<Visa> {
        draft.validate()?;

        let mut visa = self
            .visas
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::VisaNotFound)?;

        draft.apply_to(&mut visa);
        visa.touch();
        self.visas.update(&visa).await?;

        Ok(visa)
    }
}

pub struct DeleteVisaUseCase<V> {
    visas: Arc<V>,
}

impl<V: VisaRepository> DeleteVisaUseCase<V> {
    pub fn new(visas: Arc<V>) -> Self {
        Self { visas }
    }

    pub async fn execute(&self, id: &VisaId) -> CatalogResult<()> {
        self.visas.delete(id).await
    }
}
