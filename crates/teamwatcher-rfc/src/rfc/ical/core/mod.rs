//! Value types consumed by the serializers.

mod alarm;
mod calendar;
mod record;

pub use alarm::{Alarm, DEFAULT_ALARMS};
pub use calendar::{CalendarMeta, PRODUCT_NAME, REFRESH_INTERVAL};
pub use record::EventRecord;
