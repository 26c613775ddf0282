//! Infrastructure Layer

pub mod http;
