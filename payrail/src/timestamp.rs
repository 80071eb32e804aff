//! Unix timestamp wire type.
//!
//! The Payrail API reports creation and cancellation times as bare integer
//! seconds since the Unix epoch. [`Timestamp`] wraps that representation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::time::SystemTime;

/// Seconds since the Unix epoch (1970-01-01T00:00:00Z).
///
/// Serializes as a bare JSON integer, matching the API wire format:
///
/// ```json
/// 1699999999
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = i64::deserialize(deserializer)?;
        Ok(Self(secs))
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Self(secs)
    }
}

impl Timestamp {
    /// Creates a [`Timestamp`] from a raw seconds value.
    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// Returns the current system time as a [`Timestamp`].
    ///
    /// # Panics
    ///
    /// Panics if the system clock is set to a time before the Unix epoch,
    /// which should never happen on properly configured systems.
    #[must_use]
    pub fn now() -> Self {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .expect("SystemTime before UNIX epoch?!?")
            .as_secs();
        Self(i64::try_from(now).unwrap_or(i64::MAX))
    }

    /// Returns the timestamp as raw seconds since the Unix epoch.
    #[must_use]
    pub const fn as_secs(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_deserialize_integer() {
        let ts: Timestamp = serde_json::from_str("1699999999").unwrap();
        assert_eq!(ts.as_secs(), 1_699_999_999);
    }

    #[test]
    fn test_timestamp_serialize_integer() {
        let ts = Timestamp::from_secs(42);
        assert_eq!(serde_json::to_string(&ts).unwrap(), "42");
    }

    #[test]
    fn test_timestamp_rejects_string() {
        let result: Result<Timestamp, _> = serde_json::from_str("\"1699999999\"");
        assert!(result.is_err());
    }
}
