pub mod status;

pub use status::{StatusFilter, VerificationStatus};
