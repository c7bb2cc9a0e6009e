//! Inventory error model.

use thiserror::Error;

/// Result type used across the inventory containers.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Container-level error.
///
/// Every variant is recoverable: the operation that raised it leaves the
/// container exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// The fixed-capacity container already holds `capacity` items.
    #[error("backpack is full (capacity: {capacity})")]
    CapacityExceeded { capacity: usize },

    /// No item with the given name is stored.
    #[error("item '{0}' not found")]
    NotFound(String),

    /// Binary search was requested while the container is not marked sorted.
    #[error("binary search requires the backpack to be sorted")]
    RequiresSortedPrecondition,

    /// Storage for a new node could not be obtained.
    #[error("failed to allocate storage for a new item")]
    AllocationFailure,
}

impl InventoryError {
    pub fn capacity_exceeded(capacity: usize) -> Self {
        Self::CapacityExceeded { capacity }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }
}
