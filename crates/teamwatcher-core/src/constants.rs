/// Route component constants shared across crates
pub const ICS_ROUTE_COMPONENT: &str = "ics";
pub const ICS_ROUTE_PREFIX: &str = const_str::concat!("/", ICS_ROUTE_COMPONENT);

pub const HEALTH_ROUTE_COMPONENT: &str = "health";

pub const BILLS_ROUTE_COMPONENT: &str = "bills";
pub const BILLS_ROUTE: &str = const_str::concat!(ICS_ROUTE_PREFIX, "/", BILLS_ROUTE_COMPONENT);

pub const UNC_ROUTE_COMPONENT: &str = "unc";
pub const UNC_ROUTE: &str = const_str::concat!(ICS_ROUTE_PREFIX, "/", UNC_ROUTE_COMPONENT);

/// Media type every feed is served with.
pub const ICS_CONTENT_TYPE: &str = "text/calendar; charset=utf-8";

/// Domain suffix of every event UID this service emits.
pub const UID_DOMAIN: &str = "teamwatcher.local";
