//! The document store's native timestamp representation.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Seconds and nanoseconds since the unix epoch, as written by the store.
///
/// Field order matters: the derived ordering compares `seconds` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StoreTimestamp {
    pub seconds: i64,
    #[serde(default)]
    pub nanoseconds: u32,
}

impl StoreTimestamp {
    pub fn new(seconds: i64, nanoseconds: u32) -> Self {
        Self {
            seconds,
            nanoseconds,
        }
    }

    /// Converts to a UTC date. `None` if the value is outside chrono's range.
    pub fn to_date(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, self.nanoseconds)
    }
}

impl From<DateTime<Utc>> for StoreTimestamp {
    fn from(date: DateTime<Utc>) -> Self {
        Self::new(date.timestamp(), date.timestamp_subsec_nanos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn converts_to_date() {
        let ts = StoreTimestamp::new(1_704_445_200, 0);
        let expected = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
        assert_eq!(ts.to_date(), Some(expected));
        assert_eq!(StoreTimestamp::from(expected), ts);
    }

    #[test]
    fn out_of_range_has_no_date() {
        assert_eq!(StoreTimestamp::new(i64::MAX, 0).to_date(), None);
    }

    #[test]
    fn orders_by_seconds_then_nanos() {
        let a = StoreTimestamp::new(10, 999);
        let b = StoreTimestamp::new(11, 0);
        let c = StoreTimestamp::new(11, 1);
        assert!(a < b && b < c);
    }

    #[test]
    fn nanoseconds_default_to_zero() {
        let ts: StoreTimestamp = serde_json::from_str(r#"{"seconds": 42}"#).unwrap();
        assert_eq!(ts, StoreTimestamp::new(42, 0));
    }
}
