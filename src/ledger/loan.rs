use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

/// A loan waiting for approval. Removed from the ledger once approved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoanEntry {
    pub id: Uuid,
    pub counterparty: String,
    pub purpose: String,
    pub amount: f64,
    pub requested_at: DateTime<Utc>,
}

impl LoanEntry {
    pub fn new(counterparty: impl Into<String>, purpose: impl Into<String>, amount: f64) -> Self {
        Self::at(counterparty, purpose, amount, Utc::now())
    }

    pub fn at(
        counterparty: impl Into<String>,
        purpose: impl Into<String>,
        amount: f64,
        requested_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            counterparty: counterparty.into(),
            purpose: purpose.into(),
            amount,
            requested_at,
        }
    }
}

/// Shared queue of pending loans, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoanLedger {
    entries: Vec<LoanEntry>,
}

impl LoanLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LoanEntry) -> Uuid {
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    pub fn entries(&self) -> &[LoanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&LoanEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn position_of(&self, id: Uuid) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Removes the entry at `position` (zero-based).
    pub fn take_at(&mut self, position: usize) -> Result<LoanEntry, LedgerError> {
        if position >= self.entries.len() {
            return Err(LedgerError::LoanPositionOutOfRange {
                position,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(position))
    }

    pub fn take(&mut self, id: Uuid) -> Result<LoanEntry, LedgerError> {
        let position = self.position_of(id).ok_or(LedgerError::LoanNotFound(id))?;
        Ok(self.entries.remove(position))
    }

    pub fn total_pending(&self) -> f64 {
        self.entries
            .iter()
            .fold(0.0, |acc, entry| acc + entry.amount)
    }
}
