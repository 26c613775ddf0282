//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::{PostDraft, UniversityDraft, VisaDraft};
use crate::domain::entity::{ChecklistItem, Post, University, Visa, VisaFees};
use crate::domain::repository::{PostFilter, UniversityFilter, VisaFilter};
use crate::domain::value_object::{PostKind, VisaType};
use crate::error::{CatalogError, CatalogResult};

/// Create/update guide post body
#[derive(Debug, Deserialize)]
pub struct PostRequest {
    pub kind: PostKind,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PostRequest {
    pub fn into_draft(self) -> PostDraft {
        PostDraft {
            kind: self.kind,
            title: self.title,
            body: self.body,
            country: self.country,
            university: self.university,
            program: self.program,
            tags: self.tags,
        }
    }
}

/// Guide post search query
#[derive(Debug, Deserialize, Default)]
pub struct PostQuery {
    pub kind: Option<String>,
    pub country: Option<String>,
    pub university: Option<String>,
    pub program: Option<String>,
    pub q: Option<String>,
}

impl PostQuery {
    pub fn into_filter(self) -> CatalogResult<PostFilter> {
        let kind = self
            .kind
            .as_deref()
            .map(PostKind::parse)
            .transpose()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        Ok(PostFilter {
            kind,
            country: self.country.filter(|c| !c.trim().is_empty()),
            university: self.university.filter(|u| !u.trim().is_empty()),
            program: self.program.filter(|p| !p.trim().is_empty()),
            query: self.q.filter(|q| !q.trim().is_empty()),
        })
    }
}

/// Guide post projection
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub kind: PostKind,
    pub title: String,
    pub body: String,
    pub country: Option<String>,
    pub university: Option<String>,
    pub program: Option<String>,
    pub tags: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            kind: post.kind,
            title: post.title.clone(),
            body: post.body.clone(),
            country: post.country.clone(),
            university: post.university.clone(),
            program: post.program.clone(),
            tags: post.tags.clone(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Create/update university body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversityRequest {
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub programs: Vec<String>,
    #[serde(default)]
    pub cost_estimate: Option<i64>,
    #[serde(default)]
    pub website: Option<String>,
}

impl UniversityRequest {
    pub fn into_draft(self) -> UniversityDraft {
        UniversityDraft {
            name: self.name,
            country: self.country,
            city: self.city,
            programs: self.programs,
            cost_estimate: self.cost_estimate,
            website: self.website,
        }
    }
}

/// University directory query
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UniversityQuery {
    pub country: Option<String>,
    pub program: Option<String>,
    pub max_cost: Option<i64>,
}

impl UniversityQuery {
    pub fn into_filter(self) -> UniversityFilter {
        UniversityFilter {
            country: self.country.filter(|c| !c.trim().is_empty()),
            program: self.program.filter(|p| !p.trim().is_empty()),
            max_cost: self.max_cost,
        }
    }
}

/// University projection
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversityResponse {
    pub id: String,
    pub name: String,
    pub country: String,
    pub city: Option<String>,
    pub programs: Vec<String>,
    pub cost_estimate: Option<i64>,
    pub website: Option<String>,
}

impl From<&University> for UniversityResponse {
    fn from(university: &University) -> Self {
        Self {
            id: university.id.to_string(),
            name: university.name.clone(),
            country: university.country.clone(),
            city: university.city.clone(),
            programs: university.programs.clone(),
            cost_estimate: university.cost_estimate,
            website: university.website.clone(),
        }
    }
}

/// Create/update visa entry body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisaRequest {
    pub country: String,
    pub visa_type: VisaType,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    pub processing_time: String,
    #[serde(default)]
    pub fees: Option<VisaFees>,
    #[serde(default)]
    pub eligibility: Vec<String>,
    #[serde(default)]
    pub documents: Vec<ChecklistItem>,
    #[serde(default)]
    pub application_url: Option<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
}

impl VisaRequest {
    pub fn into_draft(self) -> VisaDraft {
        VisaDraft {
            country: self.country,
            visa_type: self.visa_type,
            title: self.title,
            description: self.description,
            requirements: self.requirements,
            instructions: self.instructions,
            processing_time: self.processing_time,
            fees: self.fees,
            eligibility: self.eligibility,
            documents: self.documents,
            application_url: self.application_url,
            additional_info: self.additional_info,
        }
    }
}

/// Visa directory query
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VisaQuery {
    pub country: Option<String>,
    pub visa_type: Option<String>,
}

impl VisaQuery {
    pub fn into_filter(self) -> CatalogResult<VisaFilter> {
        let visa_type = self
            .visa_type
            .as_deref()
            .map(VisaType::parse)
            .transpose()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        Ok(VisaFilter {
            country: self.country.filter(|c| !c.trim().is_empty()),
            visa_type,
        })
    }
}

/// Visa directory projection
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisaResponse {
    pub id: String,
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
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Visa> for VisaResponse {
    fn from(visa: &Visa) -> Self {
        Self {
            id: visa.id.to_string(),
            country: visa.country.clone(),
            visa_type: visa.visa_type,
            title: visa.title.clone(),
            description: visa.description.clone(),
            requirements: visa.requirements.clone(),
            instructions: visa.instructions.clone(),
            processing_time: visa.processing_time.clone(),
            fees: visa.fees.clone(),
            eligibility: visa.eligibility.clone(),
            documents: visa.documents.clone(),
            application_url: visa.application_url.clone(),
            additional_info: visa.additional_info.clone(),
            created_at: visa.created_at,
            updated_at: visa.updated_at,
        }
    }
}
