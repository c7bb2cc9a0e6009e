//! `backpack-cli` — interactive front end for the inventory containers.
//!
//! Menus are written against `BufRead`/`Write` so they can be driven by tests
//! as well as by a terminal.

pub mod config;
pub mod console;
pub mod menu;

use std::io::{BufRead, Write};

pub use config::{BackpackConfig, ConfigError};
pub use console::Console;

/// Run the program until the user quits or input ends.
pub fn run<R: BufRead, W: Write>(input: R, output: W, config: &BackpackConfig) -> anyhow::Result<()> {
    let mut console = Console::new(input, output);
    menu::main_menu(&mut console, config.array_capacity)?;
    Ok(())
}
