//! Container trait shared by every backpack implementation.

use crate::error::InventoryResult;
use crate::item::Item;

/// Minimal interface every inventory container offers.
///
/// Instrumented searching and sorting live on the concrete containers.
pub trait Inventory {
    /// Human-readable container name (used in menus and log fields).
    const LABEL: &'static str;

    /// Store `item`. Fails without changing the container.
    fn insert(&mut self, item: Item) -> InventoryResult<()>;

    /// Remove the first item whose name is exactly `name`.
    fn remove(&mut self, name: &str) -> InventoryResult<()>;

    /// Items in traversal order.
    fn items(&self) -> Vec<&Item>;

    /// Number of live items.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
