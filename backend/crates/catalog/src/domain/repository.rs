//! Repository Traits

use kernel::id::{PostId, UniversityId, VisaId};

use crate::domain::entity::{Post, University, Visa};
use crate::domain::value_object::{PostKind, VisaType};
use crate::error::CatalogResult;

/// Hard cap on directory page size
pub const MAX_PAGE_SIZE: i64 = 50;

/// Guide post filters; all optional, combined with AND
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub kind: Option<PostKind>,
    /// Exact country match
    pub country: Option<String>,
    /// Case-insensitive substring on university
    pub university: Option<String>,
    /// Case-insensitive substring on program
    pub program: Option<String>,
    /// Case-insensitive substring on title
    pub query: Option<String>,
}

/// University directory filters
#[derive(Debug, Clone, Default)]
pub struct UniversityFilter {
    /// Exact country match
    pub country: Option<String>,
    /// Offered program type, matched case-insensitively
    pub program: Option<String>,
    pub max_cost: Option<i64>,
}

/// Guide post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    async fn create(&self, post: &Post) -> CatalogResult<()>;

    async fn find_by_id(&self, id: &PostId) -> CatalogResult<Option<Post>>;

    /// Filtered listing, newest first
    async fn list(&self, filter: &PostFilter) -> CatalogResult<Vec<Post>>;

    async fn update(&self, post: &Post) -> CatalogResult<()>;

    async fn delete(&self, id: &PostId) -> CatalogResult<()>;
}

/// Visa directory filters
#[derive(Debug, Clone, Default)]
pub struct VisaFilter {
    /// Exact country match
    pub country: Option<String>,
    pub visa_type: Option<VisaType>,
}

/// University repository trait
#[trait_variant::make(UniversityRepository: Send)]
pub trait LocalUniversityRepository {
    async fn create(&self, university: &University) -> CatalogResult<()>;

    async fn find_by_id(&self, id: &UniversityId) -> CatalogResult<Option<University>>;

    /// Filtered listing, capped at [`MAX_PAGE_SIZE`] rows
    async fn list(&self, filter: &UniversityFilter) -> CatalogResult<Vec<University>>;

    async fn update(&self, university: &University) -> CatalogResult<()>;

    async fn delete(&self, id: &UniversityId) -> CatalogResult<()>;
}

/// Visa directory repository trait
#[trait_variant::make(VisaRepository: Send)]
pub trait LocalVisaRepository {
    async fn create(&self, visa: &Visa) -> CatalogResult<()>;

    async fn find_by_id(&self, id: &VisaId) -> CatalogResult<Option<Visa>>;

    /// Filtered listing, ordered by country then visa type
    async fn list(&self, filter: &VisaFilter) -> CatalogResult<Vec<Visa>>;

    async fn update(&self, visa: &Visa) -> CatalogResult<()>;

    async fn delete(&self, id: &VisaId) -> CatalogResult<()>;
}
