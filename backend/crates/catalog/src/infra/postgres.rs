//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UniversityId, UserId, VisaId};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entity::{ChecklistItem, Post, University, Visa, VisaFees};
use crate::domain::repository::{
    MAX_PAGE_SIZE, PostFilter, PostRepository, UniversityFilter, UniversityRepository, VisaFilter,
    VisaRepository,
};
use crate::domain::value_object::{PostKind, VisaType};
use crate::error::{CatalogError, CatalogResult};

const POST_COLUMNS: &str = r#"
    id, kind, title, body, country, university, program, tags, author_id,
    created_at, updated_at
"#;

const UNIVERSITY_COLUMNS: &str = r#"
    id, name, country, city, programs, cost_estimate, website,
    created_at, updated_at
"#;

const VISA_COLUMNS: &str = r#"
    id, country, visa_type, title, description, requirements, instructions,
    processing_time, fees, eligibility, documents, application_url,
    additional_info, created_at, updated_at
"#;

/// PostgreSQL-backed catalog repository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgCatalogRepository {
    async fn create(&self, post: &Post) -> CatalogResult<()> {
        sqlx::query(&format!(
            "INSERT INTO posts ({POST_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)"
        ))
        .bind(post.id.as_uuid())
        .bind(post.kind.as_str())
        .bind(&post.title)
        .bind(&post.body)
        .bind(&post.country)
        .bind(&post.university)
        .bind(&post.program)
        .bind(&post.tags)
        .bind(post.author_id.as_ref().map(|id| *id.as_uuid()))
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &PostId) -> CatalogResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_post()).transpose()
    }

    async fn list(&self, filter: &PostFilter) -> CatalogResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            r#"
            SELECT {POST_COLUMNS} FROM posts
            WHERE ($1::text IS NULL OR kind = $1)
              AND ($2::text IS NULL OR country = $2)
              AND ($3::text IS NULL OR university ILIKE '%' || $3 || '%')
              AND ($4::text IS NULL OR program ILIKE '%' || $4 || '%')
              AND ($5::text IS NULL OR title ILIKE '%' || $5 || '%')
            ORDER BY created_at DESC
            "#
        ))
        .bind(filter.kind.map(|k| k.as_str()))
        .bind(filter.country.as_deref())
        .bind(filter.university.as_deref())
        .bind(filter.program.as_deref())
        .bind(filter.query.as_deref())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_post()).collect()
    }

    async fn update(&self, post: &Post) -> CatalogResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE posts SET
                kind = $2, title = $3, body = $4, country = $5,
                university = $6, program = $7, tags = $8, updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(post.id.as_uuid())
        .bind(post.kind.as_str())
        .bind(&post.title)
        .bind(&post.body)
        .bind(&post.country)
        .bind(&post.university)
        .bind(&post.program)
        .bind(&post.tags)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::PostNotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: &PostId) -> CatalogResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::PostNotFound);
        }

        Ok(())
    }
}

// ============================================================================
// University Repository Implementation
// ============================================================================

impl UniversityRepository for PgCatalogRepository {
    async fn create(&self, university: &University) -> CatalogResult<()> {
        sqlx::query(&format!(
            "INSERT INTO universities ({UNIVERSITY_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)"
        ))
        .bind(university.id.as_uuid())
        .bind(&university.name)
        .bind(&university.country)
        .bind(&university.city)
        .bind(&university.programs)
        .bind(university.cost_estimate)
        .bind(&university.website)
        .bind(university.created_at)
        .bind(university.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &UniversityId) -> CatalogResult<Option<University>> {
        let row = sqlx::query_as::<_, UniversityRow>(&format!(
            "SELECT {UNIVERSITY_COLUMNS} FROM universities WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_university()))
    }

    async fn list(&self, filter: &UniversityFilter) -> CatalogResult<Vec<University>> {
        // Program matching against a text[] column uses ILIKE ANY
        let rows = sqlx::query_as::<_, UniversityRow>(&format!(
            r#"
            SELECT {UNIVERSITY_COLUMNS} FROM universities
            WHERE ($1::text IS NULL OR country = $1)
              AND ($2::text IS NULL OR EXISTS (
                    SELECT 1 FROM unnest(programs) AS p WHERE p ILIKE $2
                  ))
              AND ($3::bigint IS NULL OR cost_estimate <= $3)
            ORDER BY name ASC
            LIMIT $4
            "#
        ))
        .bind(filter.country.as_deref())
        .bind(filter.program.as_deref())
        .bind(filter.max_cost)
        .bind(MAX_PAGE_SIZE)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_university()).collect())
    }

    async fn update(&self, university: &University) -> CatalogResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE universities SET
                name = $2, country = $3, city = $4, programs = $5,
                cost_estimate = $6, website = $7, updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(university.id.as_uuid())
        .bind(&university.name)
        .bind(&university.country)
        .bind(&university.city)
        .bind(&university.programs)
        .bind(university.cost_estimate)
        .bind(&university.website)
        .bind(university.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::UniversityNotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: &UniversityId) -> CatalogResult<()> {
        let result = sqlx::query("DELETE FROM universities WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::UniversityNotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Visa Repository Implementation
// ============================================================================

impl VisaRepository for PgCatalogRepository {
    async fn create(&self, visa: &Visa) -> CatalogResult<()> {
        sqlx::query(&format!(
            "INSERT INTO visas ({VISA_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)"
        ))
        .bind(visa.id.as_uuid())
        .bind(&visa.country)
        .bind(visa.visa_type.as_str())
        .bind(&visa.title)
        .bind(&visa.description)
        .bind(&visa.requirements)
        .bind(&visa.instructions)
        .bind(&visa.processing_time)
        .bind(visa.fees.as_ref().map(Json))
        .bind(&visa.eligibility)
        .bind(Json(&visa.documents))
        .bind(&visa.application_url)
        .bind(&visa.additional_info)
        .bind(visa.created_at)
        .bind(visa.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &VisaId) -> CatalogResult<Option<Visa>> {
        let row =
            sqlx::query_as::<_, VisaRow>(&format!("SELECT {VISA_COLUMNS} FROM visas WHERE id = $1"))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await?;

        row.map(|r| r.into_visa()).transpose()
    }

    async fn list(&self, filter: &VisaFilter) -> CatalogResult<Vec<Visa>> {
        let rows = sqlx::query_as::<_, VisaRow>(&format!(
            r#"
            SELECT {VISA_COLUMNS} FROM visas
            WHERE ($1::text IS NULL OR country = $1)
              AND ($2::text IS NULL OR visa_type = $2)
            ORDER BY country ASC, visa_type ASC
            "#
        ))
        .bind(filter.country.as_deref())
        .bind(filter.visa_type.map(|t| t.as_str()))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_visa()).collect()
    }

    async fn update(&self, visa: &Visa) -> CatalogResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE visas SET
                country = $2, visa_type = $3, title = $4, description = $5,
                requirements = $6, instructions = $7, processing_time = $8,
                fees = $9, eligibility = $10, documents = $11,
                application_url = $12, additional_info = $13, updated_at = $14
            WHERE id = $1
            "#,
        )
        .bind(visa.id.as_uuid())
        .bind(&visa.country)
        .bind(visa.visa_type.as_str())
        .bind(&visa.title)
        .bind(&visa.description)
        .bind(&visa.requirements)
        .bind(&visa.instructions)
        .bind(&visa.processing_time)
        .bind(visa.fees.as_ref().map(Json))
        .bind(&visa.eligibility)
        .bind(Json(&visa.documents))
        .bind(&visa.application_url)
        .bind(&visa.additional_info)
        .bind(visa.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::VisaNotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: &VisaId) -> CatalogResult<()> {
        let result = sqlx::query("DELETE FROM visas WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::VisaNotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    kind: String,
    title: String,
    body: String,
    country: Option<String>,
    university: Option<String>,
    program: Option<String>,
    tags: Vec<String>,
    author_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> CatalogResult<Post> {
        let kind =
            PostKind::parse(&self.kind).map_err(|e| CatalogError::Internal(e.to_string()))?;

        Ok(Post {
            id: PostId::from_uuid(self.id),
            kind,
            title: self.title,
            body: self.body,
            country: self.country,
            university: self.university,
            program: self.program,
            tags: self.tags,
            author_id: self.author_id.map(UserId::from_uuid),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct UniversityRow {
    id: Uuid,
    name: String,
    country: String,
    city: Option<String>,
    programs: Vec<String>,
    cost_estimate: Option<i64>,
    website: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UniversityRow {
    fn into_university(self) -> University {
        University {
            id: UniversityId::from_uuid(self.id),
            name: self.name,
            country: self.country,
            city: self.city,
            programs: self.programs,
            cost_estimate: self.cost_estimate,
            website: self.website,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct VisaRow {
    id: Uuid,
    country: String,
    visa_type: String,
    title: String,
    description: String,
    requirements: Vec<String>,
    instructions: Vec<String>,
    processing_time: String,
    fees: Option<Json<VisaFees>>,
    eligibility: Vec<String>,
    documents: Json<Vec<ChecklistItem>>,
    application_url: Option<String>,
    additional_info: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl VisaRow {
    fn into_visa(self) -> CatalogResult<Visa> {
        let visa_type = VisaType::parse(&self.visa_type)
            .map_err(|e| CatalogError::Internal(e.to_string()))?;

        Ok(Visa {
            id: VisaId::from_uuid(self.id),
            country: self.country,
            visa_type,
            title: self.title,
            description: self.description,
            requirements: self.requirements,
            instructions: self.instructions,
            processing_time: self.processing_time,
            fees: self.fees.map(|f| f.0),
            eligibility: self.eligibility,
            documents: self.documents.0,
            application_url: self.application_url,
            additional_info: self.additional_info,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
