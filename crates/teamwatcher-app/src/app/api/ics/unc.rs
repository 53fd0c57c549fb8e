use chrono::Utc;
use salvo::{Depot, Response, handler};

use super::write_calendar;
use crate::error::AppResult;
use crate::feed_handler::get_feed_service_from_depot;

async fn render(depot: &Depot) -> AppResult<String> {
    let service = get_feed_service_from_depot(depot)?;
    Ok(service.unc(Utc::now()).await?)
}

#[handler]
pub(super) async fn unc(depot: &mut Depot, res: &mut Response) {
    write_calendar(res, render(depot).await);
}
