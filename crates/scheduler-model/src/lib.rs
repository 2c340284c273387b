//! # scheduler-model
//!
//! Value types for university course scheduling.
//!
//! The centerpiece is [`TimeBlock`], the slot a recurring course meeting
//! occupies: a day of the week, offset-qualified start and end times of
//! day, and the calendar date range for which the slot is valid within a
//! term. Around it sit three mutually consistent algorithms: pairwise
//! overlap detection across the day/time/date dimensions, a five-key
//! total order for canonical sorting, and structural equality and
//! hashing over the same keys for set-based deduplication.
//!
//! Everything here is a pure immutable value: no I/O, no clocks, no
//! shared mutable state. A conflict-search engine can evaluate
//! [`TimeBlock::overlaps`] over many pairs in parallel without locking;
//! an ingestion layer constructs the values once from parsed catalog
//! data and they are read-only thereafter.
//!
//! ## Modules
//!
//! - [`block`] — the time block value type, its overlap predicates, and ordering
//! - [`offset_time`] — time-of-day with a fixed UTC offset
//! - [`records`] — university, term, section, and meeting identity records
//! - [`error`] — error types

pub mod block;
pub mod error;
pub mod offset_time;
pub mod records;

pub use block::{DayStyle, TimeBlock};
pub use error::ModelError;
pub use offset_time::OffsetTime;
pub use records::{Meeting, Section, Term, University};
