mod health;
mod ics;

use salvo::Router;

// Re-export route constants from core
pub use teamwatcher_core::constants::{
    BILLS_ROUTE, BILLS_ROUTE_COMPONENT, HEALTH_ROUTE_COMPONENT, ICS_ROUTE_COMPONENT,
    ICS_ROUTE_PREFIX, UNC_ROUTE, UNC_ROUTE_COMPONENT,
};

/// ## Summary
/// Constructs the router serving the health check and every team feed.
#[must_use]
pub fn routes() -> Router {
    Router::new().push(health::routes()).push(ics::routes())
}
