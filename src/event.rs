//! Hackathon countdown.

use chrono::{DateTime, Utc};

/// Time remaining until the submission deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl std::fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Time left until `target`, or `None` once the deadline has passed
pub fn time_left(target: DateTime<Utc>, now: DateTime<Utc>) -> Option<TimeLeft> {
    let difference = (target - now).num_seconds();
    if difference <= 0 {
        return None;
    }
    Some(TimeLeft {
        days: difference / 86_400,
        hours: (difference / 3_600) % 24,
        minutes: (difference / 60) % 60,
        seconds: difference % 60,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_time_left_breakdown() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let target = Utc.with_ymd_and_hms(2025, 6, 3, 5, 4, 3).unwrap();
        let left = time_left(target, now).unwrap();
        assert_eq!((left.days, left.hours, left.minutes, left.seconds), (2, 5, 4, 3));
        assert_eq!(left.to_string(), "2d 05h 04m 03s");
    }

    #[test]
    fn test_time_left_finished() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(time_left(now, now), None);
        let past = Utc.with_ymd_and_hms(2025, 5, 31, 0, 0, 0).unwrap();
        assert_eq!(time_left(past, now), None);
    }
}
