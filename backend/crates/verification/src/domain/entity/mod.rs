pub mod verification_request;
