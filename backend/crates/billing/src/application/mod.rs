//! Application Layer

pub mod config;
pub mod subscription;

pub use subscription::{
    CancelSubscriptionUseCase, CreateCheckoutSessionUseCase, GetSessionUseCase,
    SubscribeFreeUseCase, SubscribePremiumUseCase,
};
