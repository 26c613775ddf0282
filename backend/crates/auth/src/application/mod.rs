//! Application Layer
//!
//! Use cases orchestrating the domain against repositories.

pub mod config;
pub mod login;
pub mod profile;
pub mod register;

pub use login::LoginUseCase;
pub use profile::{GetProfileUseCase, UpdateContactUseCase, UpdateProfileUseCase};
pub use register::RegisterUseCase;
