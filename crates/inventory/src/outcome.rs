//! Instrumented results returned by searches and sorts.

use serde::{Deserialize, Serialize};

use backpack_core::{InventoryError, InventoryResult};

/// Result of a search plus the number of comparisons it took.
///
/// A miss is not an error here: the comparison count is meaningful either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome<T> {
    pub found: Option<T>,
    pub comparisons: usize,
}

impl<T> SearchOutcome<T> {
    pub fn hit(found: T, comparisons: usize) -> Self {
        Self {
            found: Some(found),
            comparisons,
        }
    }

    pub fn miss(comparisons: usize) -> Self {
        Self {
            found: None,
            comparisons,
        }
    }

    pub fn is_found(&self) -> bool {
        self.found.is_some()
    }

    /// Drop the instrumentation and turn a miss into `NotFound`.
    pub fn into_result(self, name: &str) -> InventoryResult<T> {
        self.found.ok_or_else(|| InventoryError::not_found(name))
    }
}

/// What `ArrayInventory::sort` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOutcome {
    /// The sortedness flag was already set; nothing was touched.
    AlreadySorted,
    /// A bubble sort pass ran to completion.
    Sorted { comparisons: usize, swaps: usize },
}

impl SortOutcome {
    pub fn swaps(&self) -> usize {
        match self {
            SortOutcome::AlreadySorted => 0,
            SortOutcome::Sorted { swaps, .. } => *swaps,
        }
    }

    pub fn comparisons(&self) -> usize {
        match self {
            SortOutcome::AlreadySorted => 0,
            SortOutcome::Sorted { comparisons, .. } => *comparisons,
        }
    }
}
