//! Admin Queue Listing

use std::sync::Arc;

use crate::domain::entity::verification_request::AdminRequestView;
use crate::domain::repository::VerificationRepository;
use crate::domain::value_object::status::StatusFilter;
use crate::error::VerificationResult;

pub struct ListRequestsUseCase<R> {
    requests: Arc<R>,
}

impl<R> ListRequestsUseCase<R>
where
    R: VerificationRepository,
{
    pub fn new(requests: Arc<R>) -> Self {
        Self { requests }
    }

    /// Newest first; `Pending` filter shows the open queue, `All` includes
    /// reviewed history with reviewer identity
    pub async fn execute(&self, filter: StatusFilter) -> VerificationResult<Vec<AdminRequestView>> {
        self.requests.list(filter).await
    }
}
