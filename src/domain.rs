//! Domain data shapes shared across layers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{FREE_SCHEME_NO, FREE_SCHEME_YES, PLACEHOLDER};

/// One fixed position in the predetermined ranking, keyed by the
/// alternate-name string under which live data is matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankSlot {
    pub rank: u32,
    pub canonical_key: String,
}

/// Participation in the free quality kindergarten education scheme,
/// tri-state because the source column may be absent or unrecognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FreeSchemeStatus {
    Enrolled,
    NotEnrolled,
    Unknown,
}

impl FreeSchemeStatus {
    /// Maps a raw source cell to the tri-state status.
    pub fn from_source(value: &str) -> Self {
        match value.trim() {
            v if v == FREE_SCHEME_YES => FreeSchemeStatus::Enrolled,
            v if v == FREE_SCHEME_NO => FreeSchemeStatus::NotEnrolled,
            _ => FreeSchemeStatus::Unknown,
        }
    }

    /// Display string used by the view layer, the filter dimension and the
    /// CSV export.
    pub fn display(&self) -> &'static str {
        match self {
            FreeSchemeStatus::Enrolled => "有",
            FreeSchemeStatus::NotEnrolled => "沒有",
            FreeSchemeStatus::Unknown => PLACEHOLDER,
        }
    }
}

/// The normalized unit the pipeline operates on: one per rank slot, every
/// unresolved field carrying the placeholder sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Deterministic identifier derived from the rank (`kg-001` .. `kg-100`).
    pub id: String,
    pub rank: u32,
    /// Alternate (English) display name; the key under which matching occurred.
    pub canonical_key: String,
    /// Localized (Chinese) display name.
    pub localized_name: String,
    pub district: String,
    /// Free-form tuition display string, e.g. `免費` or `$1,234`.
    pub tuition_text: String,
    pub phone: String,
    pub address: String,
    /// Kept verbatim when present in the source, so it may be empty.
    pub website: String,
    pub free_scheme: FreeSchemeStatus,
    pub teaching_language: String,
    pub gender: String,
    pub category: String,
}

/// Derives the stable record identifier for a rank slot.
pub fn record_id(rank: u32) -> String {
    format!("kg-{rank:03}")
}

/// One value per filter dimension; an empty string places no constraint on
/// that dimension. Always replaced wholesale, never patched field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub district: String,
    pub language: String,
    pub gender: String,
    pub free_scheme: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.district.is_empty()
            && self.language.is_empty()
            && self.gender.is_empty()
            && self.free_scheme.is_empty()
    }
}

/// Supported orderings for the visible record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    RankAsc,
    NameAsc,
    NameDesc,
    DistrictAsc,
    TuitionAsc,
    TuitionDesc,
}

impl SortKey {
    /// Parses the UI/CLI token for a sort key.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "rank" => Some(SortKey::RankAsc),
            "name" => Some(SortKey::NameAsc),
            "name-desc" => Some(SortKey::NameDesc),
            "district" => Some(SortKey::DistrictAsc),
            "tuition" => Some(SortKey::TuitionAsc),
            "tuition-desc" => Some(SortKey::TuitionDesc),
            _ => None,
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::RankAsc
    }
}

/// Why a load cycle fell back to placeholder-filled records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradeReason {
    /// Non-success status or transport exception on the fetch.
    Transport,
    /// Fetch succeeded but no usable data rows were parsed.
    EmptySource,
}

impl fmt::Display for DegradeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegradeReason::Transport => write!(f, "source unreachable"),
            DegradeReason::EmptySource => write!(f, "source empty or unparsable"),
        }
    }
}

/// Tagged result of a load cycle. Both variants carry a fully-shaped record
/// set (one record per rank slot); the tag tells callers whether the fields
/// came from live data or degraded to placeholders.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    Live(Vec<Record>),
    Degraded(Vec<Record>, DegradeReason),
}

impl LoadOutcome {
    pub fn records(&self) -> &[Record] {
        match self {
            LoadOutcome::Live(records) | LoadOutcome::Degraded(records, _) => records,
        }
    }

    pub fn into_records(self) -> Vec<Record> {
        match self {
            LoadOutcome::Live(records) | LoadOutcome::Degraded(records, _) => records,
        }
    }

    pub fn degrade_reason(&self) -> Option<DegradeReason> {
        match self {
            LoadOutcome::Live(_) => None,
            LoadOutcome::Degraded(_, reason) => Some(*reason),
        }
    }
}
