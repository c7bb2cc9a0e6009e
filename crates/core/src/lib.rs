//! `backpack-core` — shared building blocks for the inventory containers.
//!
//! This crate contains the item record, the error model and the container
//! trait. It performs no I/O.

pub mod error;
pub mod inventory;
pub mod item;

pub use error::{InventoryError, InventoryResult};
pub use inventory::Inventory;
pub use item::{Item, KIND_MAX_CHARS, NAME_MAX_CHARS};
