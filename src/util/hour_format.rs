pub struct HourFormat {}

impl HourFormat {
    pub fn new() -> Self {
        HourFormat {}
    }

    /// Format elapsed seconds as H:MM:SS, or MM:SS under an hour.
    pub fn format(&self, seconds: &f64) -> String {
        let total = if seconds.is_finite() {
            seconds.max(0.0) as u64
        } else {
            0
        };
        let hours = total / 3600;
        let min = (total % 3600) / 60;
        let sec = total % 60;
        if hours > 0 {
            format!("{}:{:02}:{:02}", hours, min, sec)
        } else {
            format!("{:02}:{:02}", min, sec)
        }
    }
}

impl Default for HourFormat {
    fn default() -> Self {
        Self::new()
    }
}
