//! Course meeting time blocks.
//!
//! A [`TimeBlock`] records when a recurring course meeting occupies its
//! weekly slot: the day of the week, the offset-qualified start and end
//! times of day, and the range of calendar dates for which the slot is
//! valid within the term. Meetings that repeat on several days of the
//! week are represented as one block per day; a meeting whose time
//! changes mid-term is represented as one block per date range.
//!
//! Blocks are immutable values. Construction sets every field exactly
//! once, so instances are safe to reuse as `HashSet`/`BTreeSet` keys and
//! to share across threads while a conflict search evaluates
//! [`TimeBlock::overlaps`] over many pairs in parallel.
//!
//! # Overlap boundary policy
//!
//! The two range dimensions deliberately use opposite boundary rules:
//!
//! - **Times are boundary-exclusive.** Universities publish back-to-back
//!   slots like 8–10AM and 10–11AM; a shared end/start minute is not a
//!   conflict (minimum passing periods are a concern for the scheduling
//!   engine, not this predicate). Identical start instants or identical
//!   end instants *are* conflicts.
//! - **Dates are boundary-inclusive.** Partial-term segments are often
//!   published so that one segment ends on the very date the next one
//!   begins; such segments are considered date-overlapping.

use std::cmp::Ordering;
use std::fmt;

use chrono::{Duration, FixedOffset, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::offset_time::OffsetTime;

// ── TimeBlock ───────────────────────────────────────────────────────────────

/// When a recurring course meeting occupies its weekly slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeBlock {
    day: Weekday,
    start_time: OffsetTime,
    end_time: OffsetTime,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TimeBlock {
    /// Create a block from local times and the campus UTC offset.
    ///
    /// No ordering validation is performed: catalogs use reversed or
    /// equal start/end values as "not yet announced" markers, so a block
    /// with negative [`duration`](Self::duration) or an inverted date
    /// range is constructible. Use [`try_new`](Self::try_new) to reject
    /// such inputs.
    pub fn new(
        day: Weekday,
        start_time: NaiveTime,
        end_time: NaiveTime,
        offset: FixedOffset,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self::from_offset_times(
            day,
            OffsetTime::new(start_time, offset),
            OffsetTime::new(end_time, offset),
            start_date,
            end_date,
        )
    }

    /// Create a block from already offset-qualified times.
    ///
    /// Equivalent inputs produce field-identical results with
    /// [`new`](Self::new). Performs no ordering validation.
    pub fn from_offset_times(
        day: Weekday,
        start_time: OffsetTime,
        end_time: OffsetTime,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            day,
            start_time,
            end_time,
            start_date,
            end_date,
        }
    }

    /// Like [`new`](Self::new), but rejects inverted ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidTimeRange`] unless the start instant
    /// strictly precedes the end instant, and
    /// [`ModelError::InvalidDateRange`] if the start date falls after the
    /// end date (equal dates describe a single-day block and are fine).
    pub fn try_new(
        day: Weekday,
        start_time: NaiveTime,
        end_time: NaiveTime,
        offset: FixedOffset,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, ModelError> {
        let block = Self::new(day, start_time, end_time, offset, start_date, end_date);
        if !block.start_time.is_before(&block.end_time) {
            return Err(ModelError::InvalidTimeRange(format!(
                "start {} does not precede end {}",
                block.start_time, block.end_time
            )));
        }
        if block.start_date > block.end_date {
            return Err(ModelError::InvalidDateRange(format!(
                "start {} falls after end {}",
                block.start_date, block.end_date
            )));
        }
        Ok(block)
    }

    /// Day of the week on which the block is slotted.
    pub fn day(&self) -> Weekday {
        self.day
    }

    /// Offset-qualified start time.
    pub fn start_time(&self) -> OffsetTime {
        self.start_time
    }

    /// Offset-qualified end time.
    pub fn end_time(&self) -> OffsetTime {
        self.end_time
    }

    /// Start time as the campus wall clock reads it.
    pub fn local_start_time(&self) -> NaiveTime {
        self.start_time.local_time()
    }

    /// End time as the campus wall clock reads it.
    pub fn local_end_time(&self) -> NaiveTime {
        self.end_time.local_time()
    }

    /// First date on which the block is in effect.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last date on which the block is in effect.
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Instant difference between end and start times.
    ///
    /// Negative when the end precedes the start, which unvalidated
    /// catalog data may produce.
    pub fn duration(&self) -> Duration {
        Duration::nanoseconds(self.end_time.instant_nanos() - self.start_time.instant_nanos())
    }

    /// Length of the validity date range in whole days.
    pub fn dates_span(&self) -> i64 {
        self.end_date.signed_duration_since(self.start_date).num_days()
    }

    // ── Overlap predicate ───────────────────────────────────────────────────

    /// Whether two blocks claim any common point in the schedule.
    ///
    /// True only when the blocks fall on the same day of the week *and*
    /// their time ranges overlap *and* their date ranges overlap, under
    /// the boundary policies of [`time_overlaps`](Self::time_overlaps)
    /// and [`date_overlaps`](Self::date_overlaps). A `true` result means
    /// the two meetings cannot coexist in one schedule.
    ///
    /// Symmetric: `a.overlaps(&b) == b.overlaps(&a)`.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day_overlaps(other) && self.time_overlaps(other) && self.date_overlaps(other)
    }

    /// Whether both blocks are slotted on the same day of the week.
    pub fn day_overlaps(&self, other: &Self) -> bool {
        self.day == other.day
    }

    /// Whether the time ranges overlap, ignoring day and dates.
    ///
    /// Boundary-exclusive: one block ending exactly when the other
    /// starts is NOT an overlap (8–10AM and 10–11AM coexist). Equal
    /// start instants or equal end instants ARE overlaps. All
    /// comparisons are instant-correct, so blocks published in different
    /// UTC offsets compare on the timeline rather than on wall clocks.
    pub fn time_overlaps(&self, other: &Self) -> bool {
        self.start_time.same_instant(&other.start_time)
            || self.end_time.same_instant(&other.end_time)
            || (self.start_time.is_after(&other.start_time)
                && self.start_time.is_before(&other.end_time))
            || (other.start_time.is_after(&self.start_time)
                && other.start_time.is_before(&self.end_time))
    }

    /// Whether the date ranges overlap, ignoring day and times.
    ///
    /// Boundary-inclusive: sharing any boundary date counts, including
    /// one block's end date being the other's start date. Partial-term
    /// segments that abut on a date are treated as overlapping.
    pub fn date_overlaps(&self, other: &Self) -> bool {
        self.start_date == other.start_date
            || self.end_date == other.end_date
            || self.start_date == other.end_date
            || self.end_date == other.start_date
            || (self.start_date > other.start_date && self.start_date < other.end_date)
            || (other.start_date > self.start_date && other.start_date < self.end_date)
    }

    // ── Formatting ──────────────────────────────────────────────────────────

    /// Render as `<day> <start>-<end>` with a chosen day style and a
    /// chrono format string for the local times. Presentation only; no
    /// predicate or ordering logic depends on this.
    ///
    /// `time_format` must be a valid chrono strftime string, e.g.
    /// `"%H:%M"` or `"%-I:%M %p"`.
    pub fn format(&self, style: DayStyle, time_format: &str) -> String {
        format!(
            "{} {}-{}",
            day_name(self.day, style),
            self.start_time.local_time().format(time_format),
            self.end_time.local_time().format(time_format),
        )
    }
}

/// Canonical five-key order: start date, day of week (Sunday through
/// Saturday), start time, end time, end date. The time keys use
/// [`OffsetTime`]'s instant-then-local order, so for equal local times a
/// lesser offset (a later instant) compares greater, and equal instants
/// in different offsets order by wall clock instead of tying.
///
/// `cmp` returns `Equal` exactly when the blocks are `==`, so `TimeBlock`
/// is usable in `BTreeSet`/`BTreeMap` without surprises.
impl Ord for TimeBlock {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start_date
            .cmp(&other.start_date)
            .then_with(|| {
                self.day
                    .num_days_from_sunday()
                    .cmp(&other.day.num_days_from_sunday())
            })
            .then_with(|| self.start_time.cmp(&other.start_time))
            .then_with(|| self.end_time.cmp(&other.end_time))
            .then_with(|| self.end_date.cmp(&other.end_date))
    }
}

impl PartialOrd for TimeBlock {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `<day> <start>-<end>` with offsets, e.g.
/// `Thursday 12:00:00+06:00-13:30:00+06:00`.
impl fmt::Display for TimeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            day_name(self.day, DayStyle::Full),
            self.start_time,
            self.end_time
        )
    }
}

// ── Day rendering ───────────────────────────────────────────────────────────

/// How [`TimeBlock::format`] renders the day of week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayStyle {
    /// Full English day name ("Thursday").
    #[default]
    Full,
    /// Three-letter abbreviation ("Thu").
    Short,
}

fn day_name(day: Weekday, style: DayStyle) -> &'static str {
    match style {
        DayStyle::Full => match day {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        },
        DayStyle::Short => match day {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        },
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
