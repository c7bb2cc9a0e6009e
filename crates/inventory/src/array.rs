use backpack_core::{Inventory, InventoryError, InventoryResult, Item};

use crate::outcome::{SearchOutcome, SortOutcome};

/// Capacity of an array backpack unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 10;

/// Fixed-capacity, contiguous backpack.
///
/// Items live in insertion order until `sort` is called. The `sorted` flag is
/// authoritative and is never recomputed from the contents:
/// - set on initialization (an empty backpack is sorted)
/// - set after a completed sort
/// - cleared by every successful insert
///
/// Removal shifts the tail left, so it never breaks an existing order and
/// never touches the flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayInventory {
    items: Vec<Item>,
    capacity: usize,
    sorted: bool,
}

impl Default for ArrayInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl ArrayInventory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty backpack holding at most `capacity` items.
    ///
    /// Storage grows on insert; `capacity` is only the cap.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
            sorted: true,
        }
    }

    /// Reset to the empty, sorted state. Capacity is unchanged.
    pub fn initialize(&mut self) {
        self.items.clear();
        self.sorted = true;
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Append `item` at the end.
    pub fn insert(&mut self, item: Item) -> InventoryResult<()> {
        if self.is_full() {
            return Err(InventoryError::capacity_exceeded(self.capacity));
        }

        tracing::debug!(name = item.name(), index = self.items.len(), "array insert");
        self.items.push(item);
        // The new item's position relative to the rest is unknown.
        self.sorted = false;
        Ok(())
    }

    /// Remove the lowest-index item named `name`, closing the gap.
    pub fn remove(&mut self, name: &str) -> InventoryResult<()> {
        let index = self
            .items
            .iter()
            .position(|item| item.is_named(name))
            .ok_or_else(|| InventoryError::not_found(name))?;

        // `Vec::remove` shifts every later element left by one.
        self.items.remove(index);
        tracing::debug!(name, index, "array remove");
        Ok(())
    }

    /// Live items in stored order.
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    /// Bubble sort by name (byte order, ascending).
    pub fn sort(&mut self) -> SortOutcome {
        if self.sorted {
            return SortOutcome::AlreadySorted;
        }

        let n = self.items.len();
        let mut comparisons = 0;
        let mut swaps = 0;
        for pass in 0..n.saturating_sub(1) {
            for j in 0..n - 1 - pass {
                comparisons += 1;
                if self.items[j].name() > self.items[j + 1].name() {
                    self.items.swap(j, j + 1);
                    swaps += 1;
                }
            }
        }

        self.sorted = true;
        tracing::debug!(comparisons, swaps, "array sorted");
        SortOutcome::Sorted { comparisons, swaps }
    }

    /// Scan from index 0; one comparison per element examined.
    pub fn search_linear(&self, name: &str) -> SearchOutcome<usize> {
        let mut comparisons = 0;
        for (index, item) in self.items.iter().enumerate() {
            comparisons += 1;
            if item.is_named(name) {
                return SearchOutcome::hit(index, comparisons);
            }
        }
        SearchOutcome::miss(comparisons)
    }

    /// Classic binary search; one comparison per midpoint visited.
    ///
    /// Requires the sortedness flag. With duplicate names any matching index
    /// may be returned, depending on the midpoints visited.
    pub fn search_binary(&self, name: &str) -> InventoryResult<SearchOutcome<usize>> {
        if !self.sorted {
            return Err(InventoryError::RequiresSortedPrecondition);
        }

        let mut comparisons = 0;
        // Half-open [low, high); `mid` is `low + (last - low) / 2` for the
        // inclusive bound `last = high - 1`.
        let mut low = 0;
        let mut high = self.items.len();
        while low < high {
            let mid = low + (high - 1 - low) / 2;
            comparisons += 1;
            match name.cmp(self.items[mid].name()) {
                core::cmp::Ordering::Equal => return Ok(SearchOutcome::hit(mid, comparisons)),
                core::cmp::Ordering::Greater => low = mid + 1,
                core::cmp::Ordering::Less => high = mid,
            }
        }
        Ok(SearchOutcome::miss(comparisons))
    }
}

impl Inventory for ArrayInventory {
    const LABEL: &'static str = "array";

    fn insert(&mut self, item: Item) -> InventoryResult<()> {
        ArrayInventory::insert(self, item)
    }

    fn remove(&mut self, name: &str) -> InventoryResult<()> {
        ArrayInventory::remove(self, name)
    }

    fn items(&self) -> Vec<&Item> {
        self.items.iter().collect()
    }

    fn len(&self) -> usize {
        ArrayInventory::len(self)
    }
}
