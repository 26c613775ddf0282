//! Domain Layer

pub mod provider;
