use chrono::Utc;
use salvo::{Depot, Request, Response, handler};

use super::write_calendar;
use crate::config::get_config_from_depot;
use crate::error::AppResult;
use crate::feed_handler::get_feed_service_from_depot;

async fn render(req: &mut Request, depot: &Depot) -> AppResult<String> {
    let settings = get_config_from_depot(depot)?;
    let service = get_feed_service_from_depot(depot)?;

    let zip = req
        .query::<String>("zip")
        .unwrap_or_else(|| settings.feeds.default_zip.clone());
    let subs = req
        .query::<String>("subs")
        .unwrap_or_else(|| settings.feeds.default_subscriptions.clone());

    tracing::debug!(%zip, %subs, "Rendering Bills feed");
    Ok(service.bills(&zip, &subs, Utc::now()).await?)
}

/// ## Summary
/// Serves the Bills calendar for `?zip=` and `?subs=`, falling back to the
/// configured defaults when either is absent.
#[handler]
pub(super) async fn bills(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    write_calendar(res, render(req, depot).await);
}
