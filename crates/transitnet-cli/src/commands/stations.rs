use std::io::{self, Write};

use anyhow::Result;

use transitnet_cli::output::OutputFormat;
use transitnet_cli::terminal::ColorPalette;
use transitnet_lib::Graph;

pub fn handle_stations_command(graph: &Graph, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    format.write_stations(&mut handle, graph, &ColorPalette::detect())?;
    handle.flush()?;
    Ok(())
}
