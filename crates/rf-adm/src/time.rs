//! Time values for ADM block timing
//!
//! ADM writes times as clock text `hh:mm:ss.fffff`. Values are held with
//! nanosecond resolution so that parsed text survives a round trip.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AdmError, AdmResult};

const NANOS_PER_TEN_MICROS: u64 = 10_000;

/// Non-negative point or span on the programme timeline
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Time(std::time::Duration);

impl Time {
    pub const ZERO: Self = Self(std::time::Duration::ZERO);

    #[inline]
    pub fn from_nanos(nanos: u64) -> Self {
        Self(std::time::Duration::from_nanos(nanos))
    }

    #[inline]
    pub fn from_millis(ms: u64) -> Self {
        Self(std::time::Duration::from_millis(ms))
    }

    /// Whole nanoseconds, saturating at `u64::MAX`
    #[inline]
    pub fn as_nanos(self) -> u64 {
        u64::try_from(self.0.as_nanos()).unwrap_or(u64::MAX)
    }

    #[inline]
    pub fn as_seconds(self) -> f64 {
        self.0.as_secs_f64()
    }
}

impl From<std::time::Duration> for Time {
    fn from(duration: std::time::Duration) -> Self {
        Self(duration)
    }
}

impl From<Time> for std::time::Duration {
    fn from(time: Time) -> Self {
        time.0
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.as_secs();
        let nanos = self.0.subsec_nanos() as u64;
        let (h, m, s) = (secs / 3600, (secs / 60) % 60, secs % 60);
        if nanos % NANOS_PER_TEN_MICROS == 0 {
            write!(f, "{h:02}:{m:02}:{s:02}.{:05}", nanos / NANOS_PER_TEN_MICROS)
        } else {
            write!(f, "{h:02}:{m:02}:{s:02}.{nanos:09}")
        }
    }
}

impl FromStr for Time {
    type Err = AdmError;

    fn from_str(s: &str) -> AdmResult<Self> {
        let bad = |reason: &str| AdmError::invalid("Time", format!("'{s}': {reason}"));

        let mut fields = s.trim().split(':');
        let (Some(h), Some(m), Some(rest), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(bad("expected hh:mm:ss.fffff"));
        };

        let (sec, frac) = match rest.split_once('.') {
            Some((_, "")) => return Err(bad("empty fraction")),
            Some(parts) => parts,
            None => (rest, ""),
        };
        let number = |text: &str| -> AdmResult<u64> {
            if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
                return Err(bad("non-numeric field"));
            }
            text.parse().map_err(|_| bad("field overflow"))
        };

        let hours = number(h)?;
        let minutes = number(m)?;
        let seconds = number(sec)?;
        if minutes >= 60 || seconds >= 60 {
            return Err(bad("minutes and seconds must be below 60"));
        }

        let nanos = if frac.is_empty() {
            0
        } else if frac.len() > 9 {
            return Err(bad("more than 9 fraction digits"));
        } else {
            number(frac)? * 10u64.pow(9 - frac.len() as u32)
        };

        let total = hours
            .checked_mul(3600)
            .and_then(|v| v.checked_add(minutes * 60 + seconds))
            .ok_or_else(|| bad("hours overflow"))?;
        Ok(Self(std::time::Duration::new(total, nanos as u32)))
    }
}

impl TryFrom<String> for Time {
    type Error = AdmError;

    fn try_from(value: String) -> AdmResult<Self> {
        value.parse()
    }
}

impl From<Time> for String {
    fn from(time: Time) -> Self {
        time.to_string()
    }
}

macro_rules! time_parameter {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Time);

        impl $name {
            #[inline]
            pub fn new(time: Time) -> Self {
                Self(time)
            }

            #[inline]
            pub fn get(self) -> Time {
                self.0
            }
        }

        impl From<Time> for $name {
            fn from(time: Time) -> Self {
                Self(time)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

time_parameter!(
    /// Block start relative to the parent object (`rtime`)
    Rtime
);
time_parameter!(
    /// Block length
    Duration
);
time_parameter!(
    /// Loudness-relevant start (`lstart`)
    Lstart
);
time_parameter!(
    /// Loudness-relevant length (`lduration`)
    Lduration
);
