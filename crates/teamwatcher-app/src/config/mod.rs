//! Settings access for request handlers.

use std::sync::Arc;

use salvo::async_trait;
pub use teamwatcher_core::config::*;
use teamwatcher_core::error::CoreError;

use crate::error::AppResult;

/// Makes the loaded [`Settings`] available to every handler below it.
///
/// The settings are loaded once at startup and shared, never re-read per request.
pub struct ConfigHandler {
    settings: Arc<Settings>,
}

impl ConfigHandler {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}

#[async_trait]
impl salvo::Handler for ConfigHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.settings));
    }
}

/// ## Summary
/// Retrieves the settings injected by [`ConfigHandler`].
///
/// ## Errors
/// Returns `CoreError::InvariantViolation` if no `ConfigHandler` ran for this route.
pub fn get_config_from_depot(depot: &salvo::Depot) -> AppResult<Arc<Settings>> {
    depot
        .obtain::<Arc<Settings>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Configuration not found in depot").into())
}
