//! `menu`: interactive session on stdin/stdout.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use transitnet_cli::menu::Menu;
use transitnet_cli::terminal::ColorPalette;
use transitnet_lib::Graph;

const BUILTIN_TITLE: &str = "Delhi Metro";

pub fn handle_menu_command(graph: &Graph, edges: Option<&Path>) -> Result<()> {
    let title = edges
        .and_then(Path::file_stem)
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| BUILTIN_TITLE.to_string());

    let menu = Menu::new(graph, title, ColorPalette::detect());
    menu.run(io::stdin().lock(), io::stdout().lock())
        .context("interactive menu failed")
}
