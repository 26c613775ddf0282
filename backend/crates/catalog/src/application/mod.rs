//! Application Layer

pub mod posts;
pub mod universities;
pub mod visas;

pub use posts::{
    CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase, PostDraft,
    UpdatePostUseCase,
};
pub use universities::{
    CreateUniversityUseCase, DeleteUniversityUseCase, GetUniversityUseCase,
    ListUniversitiesUseCase, UniversityDraft, UpdateUniversityUseCase,
};
pub use visas::{
    CreateVisaUseCase, DeleteVisaUseCase, GetVisaUseCase, ListVisasUseCase, UpdateVisaUseCase,
    VisaDraft,
};
