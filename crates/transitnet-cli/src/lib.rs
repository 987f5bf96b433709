//! transitnet CLI library.
//!
//! Output formatting, terminal styling, the interactive menu and the
//! error messages shared by the `transitnet` subcommands.

pub mod failure;
pub mod menu;
pub mod output;
pub mod terminal;
