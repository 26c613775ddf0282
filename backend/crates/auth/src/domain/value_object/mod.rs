pub mod email;
pub mod subscription;
pub mod user_role;

pub use email::Email;
pub use subscription::{Subscription, SubscriptionPlan, SubscriptionStatus};
pub use user_role::UserRole;
