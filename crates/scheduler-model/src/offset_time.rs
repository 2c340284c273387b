//! Time-of-day with a fixed UTC offset.
//!
//! chrono has no offset-qualified time-of-day, so this module provides
//! one: a wall-clock reading paired with the UTC offset that was in force
//! when the catalog captured it. The offset is fixed at construction and
//! never re-resolved against daylight-saving rules — a course published
//! as "12:00 at +06:00" stays exactly that.
//!
//! # Comparison semantics
//!
//! [`OffsetTime`] carries two distinct notions of "the same time":
//!
//! - **Structural equality** ([`PartialEq`]/[`Hash`]): local time AND
//!   offset. `12:00:00+06:00` and `11:00:00+05:00` describe the same
//!   instant but are *not* equal, matching the identity convention of
//!   zoned time types.
//! - **Instant comparison** ([`same_instant`], [`is_before`],
//!   [`is_after`], and the leading key of [`Ord`]): both readings are
//!   normalized to UTC before comparing, so cross-offset meetings compare
//!   correctly on the timeline.
//!
//! The total order compares the instant first and falls back to the local
//! wall clock, so it only reports `Equal` for structurally equal values.
//! One visible consequence: for the same local reading, a lesser offset
//! means a later instant and therefore compares greater.
//!
//! [`same_instant`]: OffsetTime::same_instant
//! [`is_before`]: OffsetTime::is_before
//! [`is_after`]: OffsetTime::is_after

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{FixedOffset, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ModelError;

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// A wall-clock time-of-day together with its fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetTime {
    time: NaiveTime,
    offset: FixedOffset,
}

impl OffsetTime {
    /// Pair a local time-of-day with a fixed UTC offset.
    pub fn new(time: NaiveTime, offset: FixedOffset) -> Self {
        Self { time, offset }
    }

    /// The local wall-clock reading, with the offset stripped.
    pub fn local_time(&self) -> NaiveTime {
        self.time
    }

    /// The fixed UTC offset this reading was captured in.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Nanoseconds relative to UTC midnight.
    ///
    /// This is the key for every instant-correct comparison: the local
    /// reading minus the offset. Values may be negative (a morning
    /// reading far east of Greenwich) or exceed one day (far west); only
    /// relative comparisons between keys are meaningful.
    pub fn instant_nanos(&self) -> i64 {
        let since_midnight = self.time.signed_duration_since(NaiveTime::MIN);
        let local_nanos =
            since_midnight.num_seconds() * NANOS_PER_SEC + i64::from(since_midnight.subsec_nanos());
        local_nanos - i64::from(self.offset.local_minus_utc()) * NANOS_PER_SEC
    }

    /// Whether both readings denote the same instant, offsets aside.
    pub fn same_instant(&self, other: &Self) -> bool {
        self.instant_nanos() == other.instant_nanos()
    }

    /// Whether this reading denotes an earlier instant than `other`.
    pub fn is_before(&self, other: &Self) -> bool {
        self.instant_nanos() < other.instant_nanos()
    }

    /// Whether this reading denotes a later instant than `other`.
    pub fn is_after(&self, other: &Self) -> bool {
        self.instant_nanos() > other.instant_nanos()
    }
}

/// Instant first, local wall clock as tiebreak.
///
/// The tiebreak keeps the order consistent with structural equality:
/// `cmp` returns `Equal` only when local time and offset both match.
impl Ord for OffsetTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant_nanos()
            .cmp(&other.instant_nanos())
            .then_with(|| self.time.cmp(&other.time))
    }
}

impl PartialOrd for OffsetTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Canonical text form, e.g. `12:00:00+06:00`.
impl fmt::Display for OffsetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.time, self.offset)
    }
}

/// Parse the canonical text form produced by [`Display`](fmt::Display).
///
/// Accepts `HH:MM:SS±HH:MM` (with optional fractional seconds) as well
/// as the shorter `HH:MM±HH:MM`.
impl FromStr for OffsetTime {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s
            .rfind(['+', '-'])
            .ok_or_else(|| ModelError::InvalidOffsetTime(format!("missing UTC offset in '{s}'")))?;
        let (time_part, offset_part) = s.split_at(split);

        let time = NaiveTime::parse_from_str(time_part, "%H:%M:%S%.f")
            .or_else(|_| NaiveTime::parse_from_str(time_part, "%H:%M"))
            .map_err(|e| ModelError::InvalidOffsetTime(format!("'{s}': {e}")))?;
        let offset = offset_part
            .parse::<FixedOffset>()
            .map_err(|e| ModelError::InvalidOffsetTime(format!("'{s}': {e}")))?;

        Ok(Self { time, offset })
    }
}

impl Serialize for OffsetTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OffsetTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
