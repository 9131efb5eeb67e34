use chrono::Duration;

/// Caller-supplied lookback window, combined additively from CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
}

impl Window {
    pub fn new(days: u32, hours: u32, minutes: u32) -> Self {
        Self {
            days,
            hours,
            minutes,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0
    }

    pub fn duration(&self) -> Duration {
        Duration::days(i64::from(self.days))
            + Duration::hours(i64::from(self.hours))
            + Duration::minutes(i64::from(self.minutes))
    }

    /// Human phrase for the footer, e.g. "1 hour" or "2 days and 30 minutes".
    pub fn describe(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        for (value, unit) in [
            (self.days, "day"),
            (self.hours, "hour"),
            (self.minutes, "minute"),
        ] {
            if value == 0 {
                continue;
            }
            let plural = if value == 1 { "" } else { "s" };
            parts.push(format!("{} {}{}", value, unit, plural));
        }

        match parts.len() {
            0 => "0 minutes".to_string(),
            1 => parts.remove(0),
            2 => format!("{} and {}", parts[0], parts[1]),
            _ => format!("{}, {} and {}", parts[0], parts[1], parts[2]),
        }
    }
}
