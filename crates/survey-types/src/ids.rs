//! Server-assigned survey identifiers.
//!
//! Identifiers are positive integers handed out in strictly increasing
//! order by the store, starting at [`SurveyId::FIRST`]. They are never
//! reused for the lifetime of the process.

use serde::Serialize;

/// Unique identifier for a survey record.
///
/// Serializes as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SurveyId(u64);

impl SurveyId {
    /// The first identifier allocated by a fresh store.
    pub const FIRST: Self = Self(1);

    /// Wrap a raw identifier value.
    ///
    /// Returns `None` for zero, which is never a valid identifier.
    pub const fn new(raw: u64) -> Option<Self> {
        if raw == 0 { None } else { Some(Self(raw)) }
    }

    /// Return the inner integer value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier allocated after this one, or `None` once the
    /// integer space is exhausted.
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl core::fmt::Display for SurveyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SurveyId> for u64 {
    fn from(id: SurveyId) -> Self {
        id.0
    }
}
