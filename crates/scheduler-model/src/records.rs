//! Identity records from the course catalog.
//!
//! Plain immutable value objects surrounding [`TimeBlock`]: the
//! university, the registration term, the course section, and the
//! individual meeting. Each has a closed field set with value equality;
//! none owns resources or behavior beyond identity, ordering, and
//! access. Catalog data the university has not published yet is modeled
//! as absence (`None`), never as an error.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::block::TimeBlock;

// ── University ──────────────────────────────────────────────────────────────

/// A university, identified by its common name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct University {
    name: String,
}

impl University {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The common name, e.g. "Kettering University".
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for University {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ── Term ────────────────────────────────────────────────────────────────────

/// A registration term at a university.
///
/// Identity and ordering range over the university and the term id only.
/// The display name is carried for presentation but excluded from
/// equality, hashing, and comparison: two catalog snapshots that label
/// `201402` "Spring 2014" and "Spring Term 2014" still describe the same
/// term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    university: String,
    id: String,
    name: Option<String>,
}

impl Term {
    /// Create a term from its university and the university-assigned
    /// identifier (often a numeric year/semester code like `201402`).
    pub fn new(university: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            university: university.into(),
            id: id.into(),
            name: None,
        }
    }

    /// Attach the "plain language" term name, e.g. "Spring 2014".
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn university(&self) -> &str {
        &self.university
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name, if the catalog published one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.university == other.university && self.id == other.id
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.university.hash(state);
        self.id.hash(state);
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        self.university
            .cmp(&other.university)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ── Section ─────────────────────────────────────────────────────────────────

/// A course section, identified by its course reference number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Section {
    crn: String,
}

impl Section {
    pub fn new(crn: impl Into<String>) -> Self {
        Self { crn: crn.into() }
    }

    pub fn crn(&self) -> &str {
        &self.crn
    }
}

// ── Meeting ─────────────────────────────────────────────────────────────────

/// One meeting of a section: a time block plus a location.
///
/// Any part the university has not announced yet is `None`. Ordering is
/// derived field-by-field (time block, then campus, building, room), so
/// unannounced meetings sort ahead of scheduled ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Meeting {
    block: Option<TimeBlock>,
    campus: Option<String>,
    building: Option<String>,
    room: Option<String>,
}

impl Meeting {
    pub fn new(
        block: Option<TimeBlock>,
        campus: Option<String>,
        building: Option<String>,
        room: Option<String>,
    ) -> Self {
        Self {
            block,
            campus,
            building,
            room,
        }
    }

    /// The meeting time, if announced.
    pub fn block(&self) -> Option<&TimeBlock> {
        self.block.as_ref()
    }

    /// Whether the university has announced a meeting time.
    pub fn is_scheduled(&self) -> bool {
        self.block.is_some()
    }

    pub fn campus(&self) -> Option<&str> {
        self.campus.as_deref()
    }

    pub fn building(&self) -> Option<&str> {
        self.building.as_deref()
    }

    pub fn room(&self) -> Option<&str> {
        self.room.as_deref()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
