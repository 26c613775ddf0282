//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - Signed session tokens (HMAC-SHA256)
//! - Cookie management
//! - Outbound email (best-effort mailer)
//! - Uploaded-document storage

pub mod cookie;
pub mod mailer;
pub mod password;
pub mod storage;
pub mod token;
