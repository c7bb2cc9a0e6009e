//! Interactive menus.
//!
//! Each session owns a fresh container and drops it when the user goes back to
//! the main menu. End of input anywhere ends the whole program.

use std::io::{self, BufRead, Write};

use backpack_core::{Inventory, InventoryError, Item};
use backpack_inventory::{ArrayInventory, ListInventory, SortOutcome};

use crate::console::Console;

/// Whether the caller should keep going after a menu step.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Input is exhausted.
    Exit,
}

const RULE: &str = "----------------------------------------";

/// Top-level menu: pick a backpack, or quit.
pub fn main_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    array_capacity: usize,
) -> io::Result<()> {
    loop {
        console.say("")?;
        console.say("====== BACKPACK: COMPARING DATA STRUCTURES ======")?;
        console.say("Choose which backpack to manage:")?;
        console.say("1. Array backpack (fast sorted search)")?;
        console.say("2. Linked-list backpack (flexible)")?;
        console.say("0. Quit")?;
        console.say("=================================================")?;

        let Some(choice) = console.ask_choice("Choice: ")? else {
            return Ok(());
        };

        let flow = match choice {
            Some(1) => array_session(console, array_capacity)?,
            Some(2) => list_session(console)?,
            Some(0) => {
                console.say("See you on the next adventure!")?;
                return Ok(());
            }
            _ => {
                console.say("Invalid option.")?;
                Flow::Continue
            }
        };

        if flow == Flow::Exit {
            return Ok(());
        }
    }
}

/// Array backpack session.
pub fn array_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    capacity: usize,
) -> io::Result<Flow> {
    let mut backpack = ArrayInventory::with_capacity(capacity);
    tracing::info!(container = ArrayInventory::LABEL, capacity, "session started");
    console.say("Array backpack initialized.")?;

    loop {
        console.say("")?;
        console.say("--- Backpack Menu (ARRAY) ---")?;
        console.say("1. Insert item")?;
        console.say("2. Remove item")?;
        console.say("3. List items")?;
        console.say("4. Sort items (enables binary search)")?;
        console.say("5. Search (sequential)")?;
        console.say("6. Search (binary)")?;
        console.say("0. Back")?;

        let Some(choice) = console.ask_choice("Choice: ")? else {
            return Ok(Flow::Exit);
        };

        let flow = match choice {
            Some(1) => {
                // Refuse before prompting for fields.
                if backpack.is_full() {
                    report_error(console, &InventoryError::capacity_exceeded(capacity))?;
                    Flow::Continue
                } else {
                    insert_item(console, &mut backpack)?
                }
            }
            Some(2) => remove_item(console, &mut backpack)?,
            Some(3) => {
                let header = format!("Items in Backpack (Array) [{}/{}]", backpack.len(), capacity);
                print_items(console, &header, &backpack)?;
                Flow::Continue
            }
            Some(4) => {
                match backpack.sort() {
                    SortOutcome::AlreadySorted => console.say("Backpack is already sorted.")?,
                    SortOutcome::Sorted { comparisons, swaps } => {
                        console.say("Backpack sorted successfully!")?;
                        console.say(format!(">> Comparisons: {comparisons}, swaps: {swaps}"))?;
                    }
                }
                Flow::Continue
            }
            Some(5) => {
                let Some(name) = console.ask("Name of item to find (sequential): ")? else {
                    return Ok(Flow::Exit);
                };
                let outcome = backpack.search_linear(&name);
                match outcome.found {
                    Some(index) => console.say(format!(">> Item found at position {index}."))?,
                    None => console.say(">> Item not found.")?,
                }
                console.say(format!(">> Comparisons made: {}", outcome.comparisons))?;
                Flow::Continue
            }
            Some(6) => {
                let Some(name) = console.ask("Name of item to find (binary): ")? else {
                    return Ok(Flow::Exit);
                };
                match backpack.search_binary(&name) {
                    Ok(outcome) => {
                        match outcome.found {
                            Some(index) => {
                                console.say(format!(">> Item found at position {index}."))?
                            }
                            None => console.say(">> Item not found.")?,
                        }
                        console.say(format!(">> Comparisons made: {}", outcome.comparisons))?;
                    }
                    Err(err) => report_error(console, &err)?,
                }
                Flow::Continue
            }
            Some(0) => {
                console.say("Back to the main menu...")?;
                tracing::info!(container = ArrayInventory::LABEL, "session ended");
                return Ok(Flow::Continue);
            }
            _ => {
                console.say("Invalid option.")?;
                Flow::Continue
            }
        };

        if flow == Flow::Exit {
            return Ok(Flow::Exit);
        }
    }
}

/// Linked-list backpack session. Every node is released before returning.
pub fn list_session<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Flow> {
    let mut backpack = ListInventory::new();
    tracing::info!(container = ListInventory::LABEL, "session started");
    console.say("Linked-list backpack initialized.")?;

    let flow = list_menu(console, &mut backpack);
    backpack.release_all();
    tracing::info!(container = ListInventory::LABEL, "session ended");
    flow
}

fn list_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    backpack: &mut ListInventory,
) -> io::Result<Flow> {
    loop {
        console.say("")?;
        console.say("--- Backpack Menu (LINKED LIST) ---")?;
        console.say("1. Insert item")?;
        console.say("2. Remove item")?;
        console.say("3. List items")?;
        console.say("4. Search (sequential)")?;
        console.say("0. Back")?;

        let Some(choice) = console.ask_choice("Choice: ")? else {
            return Ok(Flow::Exit);
        };

        let flow = match choice {
            Some(1) => insert_item(console, backpack)?,
            Some(2) => remove_item(console, backpack)?,
            Some(3) => {
                let header = format!("Items in Backpack (List) [{} items]", backpack.len());
                print_items(console, &header, backpack)?;
                Flow::Continue
            }
            Some(4) => {
                let Some(name) = console.ask("Name of item to find (sequential): ")? else {
                    return Ok(Flow::Exit);
                };
                let outcome = backpack.search_linear(&name);
                match outcome.found {
                    Some(item) => console.say(format!(">> Item found: {item}"))?,
                    None => console.say(">> Item not found.")?,
                }
                console.say(format!(">> Comparisons made: {}", outcome.comparisons))?;
                Flow::Continue
            }
            Some(0) => {
                console.say("Releasing list memory and going back...")?;
                return Ok(Flow::Continue);
            }
            _ => {
                console.say("Invalid option.")?;
                Flow::Continue
            }
        };

        if flow == Flow::Exit {
            return Ok(Flow::Exit);
        }
    }
}

fn insert_item<R: BufRead, W: Write, I: Inventory>(
    console: &mut Console<R, W>,
    backpack: &mut I,
) -> io::Result<Flow> {
    let Some(name) = console.ask("Item name: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(kind) = console.ask("Item type: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(quantity) = console.ask_number("Quantity: ")? else {
        return Ok(Flow::Exit);
    };

    let item = Item::new(name, kind, quantity);
    let label = item.name().to_string();
    match backpack.insert(item) {
        Ok(()) => console.say(format!("Item '{label}' added to the {} backpack.", I::LABEL))?,
        Err(err) => report_error(console, &err)?,
    }
    Ok(Flow::Continue)
}

fn remove_item<R: BufRead, W: Write, I: Inventory>(
    console: &mut Console<R, W>,
    backpack: &mut I,
) -> io::Result<Flow> {
    let Some(name) = console.ask("Name of item to remove: ")? else {
        return Ok(Flow::Exit);
    };

    match backpack.remove(&name) {
        Ok(()) => console.say(format!("Item '{name}' removed from the {} backpack.", I::LABEL))?,
        Err(err) => report_error(console, &err)?,
    }
    Ok(Flow::Continue)
}

fn print_items<R: BufRead, W: Write, I: Inventory>(
    console: &mut Console<R, W>,
    header: &str,
    backpack: &I,
) -> io::Result<()> {
    console.say("")?;
    console.say(format!("--- {header} ---"))?;
    if backpack.is_empty() {
        return console.say("The backpack is empty.");
    }
    for item in backpack.items() {
        console.say(format!("- {item}"))?;
    }
    console.say(RULE)
}

fn report_error<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: &InventoryError,
) -> io::Result<()> {
    tracing::warn!(error = %err, "operation refused");
    console.say(format!("Error: {err}"))
}
