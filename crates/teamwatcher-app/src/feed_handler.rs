use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use teamwatcher_core::error::CoreError;
use teamwatcher_service::feed::FeedService;

pub struct FeedServiceHandler {
    pub service: Arc<FeedService>,
}

#[async_trait]
impl salvo::Handler for FeedServiceHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        // One service, and one set of score caches, for every request
        depot.inject(Arc::clone(&self.service));
    }
}

/// ## Summary
/// Retrieves the feed service from the depot.
///
/// ## Errors
/// Returns an error if the feed service is not found in the depot.
pub fn get_feed_service_from_depot(depot: &salvo::Depot) -> AppResult<Arc<FeedService>> {
    depot
        .obtain::<Arc<FeedService>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Feed service not found in depot").into())
}
