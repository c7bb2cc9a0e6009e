//! Inventory containers ("backpacks").
//!
//! Two interchangeable containers for the same `Item` record:
//! - [`ArrayInventory`]: fixed capacity, sortable, linear and binary search
//! - [`ListInventory`]: unbounded singly linked chain with head insertion
//!
//! Searches and sorts report how many comparisons they made so callers can
//! show what each algorithm costs. Nothing here performs I/O.

pub mod array;
pub mod list;
pub mod outcome;

pub use array::{ArrayInventory, DEFAULT_CAPACITY};
pub use list::ListInventory;
pub use outcome::{SearchOutcome, SortOutcome};
