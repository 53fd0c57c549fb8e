/// A display reminder that fires a fixed number of minutes before start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alarm {
    pub minutes_before: u32,
}

/// Reminders attached to every published event, in emission order.
pub const DEFAULT_ALARMS: [Alarm; 2] = [Alarm::before_start(60), Alarm::before_start(10)];

impl Alarm {
    #[must_use]
    pub const fn before_start(minutes_before: u32) -> Self {
        Self { minutes_before }
    }

    /// Value of the `TRIGGER` property, e.g. `-PT60M`.
    #[must_use]
    pub fn trigger(self) -> String {
        format!("-PT{}M", self.minutes_before)
    }

    #[must_use]
    pub fn description(self) -> String {
        format!("Event in {} minutes", self.minutes_before)
    }
}
