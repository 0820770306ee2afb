use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::ops::Add;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A JWT numeric date: seconds since the Unix epoch, ignoring leap seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NumericDate(i64);

impl NumericDate {
    pub fn new(seconds: i64) -> Self {
        NumericDate(seconds)
    }

    pub fn now() -> Self {
        SystemTime::now().into()
    }

    pub fn seconds(&self) -> i64 {
        self.0
    }

    /// Returns `None` when the platform clock cannot represent the date.
    pub fn to_system_time(&self) -> Option<SystemTime> {
        let offset = Duration::from_secs(self.0.unsigned_abs());
        if self.0 >= 0 {
            UNIX_EPOCH.checked_add(offset)
        } else {
            UNIX_EPOCH.checked_sub(offset)
        }
    }
}

// Saturates at the numeric bounds
impl Add<Duration> for NumericDate {
    type Output = NumericDate;

    fn add(self, period: Duration) -> Self::Output {
        let seconds = i64::try_from(period.as_secs()).unwrap_or(i64::MAX);
        NumericDate(self.0.saturating_add(seconds))
    }
}

impl From<SystemTime> for NumericDate {
    fn from(time: SystemTime) -> Self {
        let seconds = match time.duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX),
            Err(before_epoch) => i64::try_from(before_epoch.duration().as_secs())
                .map(|s| -s)
                .unwrap_or(i64::MIN),
        };
        NumericDate(seconds)
    }
}

impl From<i64> for NumericDate {
    fn from(seconds: i64) -> Self {
        NumericDate(seconds)
    }
}

impl Display for NumericDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for NumericDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for NumericDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NumericDateVisitor;

        impl<'de> Visitor<'de> for NumericDateVisitor {
            type Value = NumericDate;

            fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
                formatter.write_str("a number of seconds since the Unix epoch")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(NumericDate(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(NumericDate)
                    .map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
            }

            // Fractions of a second are truncated toward zero
            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value.is_finite() && value >= i64::MIN as f64 && value < i64::MAX as f64 {
                    Ok(NumericDate(value.trunc() as i64))
                } else {
                    Err(E::invalid_value(Unexpected::Float(value), &self))
                }
            }
        }

        deserializer.deserialize_any(NumericDateVisitor)
    }
}
