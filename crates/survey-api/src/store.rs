//! In-memory survey store.
//!
//! [`SurveyStore`] owns the newest-first record sequence and the
//! identifier counter behind a single lock, so allocating an id and
//! inserting its record happen as one step. Nothing is persisted; the
//! store lives as long as the process.

use std::collections::VecDeque;

use survey_types::{BreakdownRow, Fields, Scalar, SurveyId, SurveyRecord};
use tokio::sync::RwLock;

/// Errors that can occur when mutating the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Every representable identifier has already been handed out.
    #[error("survey identifier space exhausted")]
    IdExhausted,
}

#[derive(Debug)]
struct Inner {
    /// Records, most recent first.
    records: VecDeque<SurveyRecord>,
    /// Next identifier to hand out; `None` once the space is used up.
    next_id: Option<SurveyId>,
}

/// Thread-safe, append-only collection of survey records.
#[derive(Debug)]
pub struct SurveyStore {
    inner: RwLock<Inner>,
}

impl SurveyStore {
    /// Create an empty store whose first record gets id 1.
    pub fn new() -> Self {
        Self::starting_at(SurveyId::FIRST)
    }

    /// Create an empty store that will allocate `first` next.
    pub fn starting_at(first: SurveyId) -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: VecDeque::new(),
                next_id: Some(first),
            }),
        }
    }

    /// Snapshot of all records, newest first.
    pub async fn list(&self) -> Vec<SurveyRecord> {
        self.inner.read().await.records.iter().cloned().collect()
    }

    /// Store a new record built from `fields` and return it.
    ///
    /// The record receives the next identifier and is placed at the
    /// front of the sequence.
    pub async fn create(&self, fields: Fields) -> Result<SurveyRecord, StoreError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id.ok_or(StoreError::IdExhausted)?;
        inner.next_id = id.next();

        let record = SurveyRecord::new(id, fields);
        inner.records.push_front(record.clone());
        Ok(record)
    }

    /// Number of stored records.
    pub async fn count(&self) -> usize {
        self.inner.read().await.records.len()
    }

    /// Group records by the value of `field`.
    ///
    /// Groups appear in the order their value is first seen when walking
    /// the records newest first. Records without the field are left out
    /// of every group but still count toward the percentage base.
    pub async fn breakdown(&self, field: &str) -> Vec<BreakdownRow> {
        let (groups, total) = {
            let inner = self.inner.read().await;
            let mut groups: Vec<(Scalar, usize)> = Vec::new();
            for value in inner.records.iter().filter_map(|r| r.field(field)) {
                if let Some((_, count)) = groups.iter_mut().find(|(v, _)| v == value) {
                    *count = count.saturating_add(1);
                } else {
                    groups.push((value.clone(), 1));
                }
            }
            (groups, inner.records.len())
        };

        groups
            .into_iter()
            .map(|(value, count)| BreakdownRow {
                value,
                count,
                percent: percent_of(count, total),
            })
            .collect()
    }
}

impl Default for SurveyStore {
    fn default() -> Self {
        Self::new()
    }
}

/// `count / total` as a whole percentage, rounding halves up.
///
/// Zero when `total` is zero.
fn percent_of(count: usize, total: usize) -> usize {
    let numerator = count.checked_mul(200).and_then(|n| n.checked_add(total));
    let denominator = total.checked_mul(2);
    match (numerator, denominator) {
        (Some(n), Some(d)) => n.checked_div(d).unwrap_or(0),
        _ => 0,
    }
}
