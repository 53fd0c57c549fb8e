/// Product name used in `PRODID`.
pub const PRODUCT_NAME: &str = "TeamWatcher";

/// How often subscribing clients should refetch the feed.
pub const REFRESH_INTERVAL: &str = "PT4H";

/// Feed-level metadata written into the calendar envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMeta {
    pub name: String,
    /// Opaque color string, usually a hex code.
    pub color: String,
}

impl CalendarMeta {
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}
