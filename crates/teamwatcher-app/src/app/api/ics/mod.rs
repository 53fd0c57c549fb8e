//! Team calendar feeds under `/ics`.

mod bills;
mod unc;

use salvo::http::{HeaderValue, StatusCode};
use salvo::{Response, Router};
use teamwatcher_core::constants::ICS_CONTENT_TYPE;

use super::{BILLS_ROUTE_COMPONENT, ICS_ROUTE_COMPONENT, UNC_ROUTE_COMPONENT};
use crate::error::AppResult;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(ICS_ROUTE_COMPONENT)
        .push(Router::with_path(BILLS_ROUTE_COMPONENT).get(bills::bills))
        .push(Router::with_path(UNC_ROUTE_COMPONENT).get(unc::unc))
}

/// ## Summary
/// Writes a rendered feed, or the status code of the failure.
///
/// Client errors carry their reason as a plain text body. Server errors are
/// logged and sent without a body.
fn write_calendar(res: &mut Response, rendered: AppResult<String>) {
    let ics = match rendered {
        Ok(ics) => ics,
        Err(e) => {
            let status = e.status_code();
            res.status_code(status);
            if status.is_client_error() {
                tracing::debug!(error = %e, "Rejecting feed request");
                res.render(e.to_string());
            } else {
                tracing::error!(error = %e, "Failed to render feed");
            }
            return;
        }
    };

    #[expect(
        clippy::let_underscore_must_use,
        reason = "Header addition failure is non-fatal"
    )]
    let _ = res.add_header(
        "Content-Type",
        HeaderValue::from_static(ICS_CONTENT_TYPE),
        true,
    );

    res.status_code(StatusCode::OK);
    if let Err(e) = res.write_body(ics.into_bytes()) {
        tracing::error!("Failed to write response body: {}", e);
    }
}
