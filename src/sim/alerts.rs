use log::warn;

/// Hard cap on the alert list; when exceeded the list is trimmed back to
/// the most recent `TRIM_TO` entries.
const MAX_ALERTS: usize = 10;
const TRIM_TO: usize = 5;

/// How many of the most recent entries are consulted when de-duplicating.
const DEDUP_WINDOW: usize = 3;

/// Minimum simulated seconds between course deviation alerts.
pub const DEVIATION_ALERT_INTERVAL: f64 = 10.0;

/// The cockpit alert list: ordered, bounded, de-duplicated against its
/// tail, with a rate limit for the chattiest source.
#[derive(Debug, Default)]
pub struct AlertLog {
    entries: Vec<String>,
    raised: u32,
    last_deviation_alert: Option<f64>,
}

impl AlertLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.raised = 0;
        self.last_deviation_alert = None;
    }

    /// Append unconditionally. Used where the caller already rate limits.
    pub fn push(&mut self, message: &str) {
        warn!("Alert: {}", message);
        self.entries.push(message.to_string());
        self.raised += 1;
        self.trim();
    }

    /// Append unless the message already appears in the recent tail.
    /// Returns whether the alert was accepted.
    pub fn push_unique(&mut self, message: &str) -> bool {
        self.push_unique_within(message, DEDUP_WINDOW)
    }

    pub fn push_unique_within(&mut self, message: &str, window: usize) -> bool {
        let start = self.entries.len().saturating_sub(window);
        if self.entries[start..].iter().any(|entry| entry == message) {
            return false;
        }
        self.push(message);
        true
    }

    pub fn deviation_alert_due(&self, elapsed: f64) -> bool {
        match self.last_deviation_alert {
            Some(last) => elapsed - last > DEVIATION_ALERT_INTERVAL,
            None => true,
        }
    }

    pub fn mark_deviation_alert(&mut self, elapsed: f64) {
        self.last_deviation_alert = Some(elapsed);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn raised(&self) -> u32 {
        self.raised
    }

    fn trim(&mut self) {
        if self.entries.len() > MAX_ALERTS {
            let drop = self.entries.len() - TRIM_TO;
            self.entries.drain(..drop);
        }
    }
}
