//! CLI module - argument parsing, menus, and the interactive loop

pub mod args;
pub mod menu;
pub mod run;

pub use args::{Cli, Commands};
pub use menu::{KeyedOption, Menu, MenuLayout, MenuStyle, Selection};
pub use run::{run_check, run_loop, run_single};
