//! Output formatting for query results and station listings.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use transitnet_lib::{Graph, QueryRenderMode, QuerySummary, StationId};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human readable sentences.
    #[default]
    Text,
    /// One station or edge per line.
    Basic,
    /// Pretty-printed JSON.
    Json,
}

/// Station entry as listed by the `stations` command.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StationListing {
    pub id: StationId,
    pub name: String,
}

/// Stations of `graph` in identifier order.
pub fn station_listings(graph: &Graph) -> Vec<StationListing> {
    graph
        .registry()
        .iter()
        .map(|(id, name)| StationListing {
            id,
            name: name.to_string(),
        })
        .collect()
}

/// Write the `id: label` table used by the `stations` command and the menu.
pub fn write_station_table<W: Write>(
    out: &mut W,
    graph: &Graph,
    palette: &ColorPalette,
) -> std::io::Result<()> {
    for (id, name) in graph.registry().iter() {
        writeln!(out, "{}{id}{}: {name}", palette.gray, palette.reset)?;
    }
    Ok(())
}

impl OutputFormat {
    /// Write a query summary in this format.
    pub fn write_summary<W: Write>(self, out: &mut W, summary: &QuerySummary) -> Result<()> {
        match self {
            OutputFormat::Text => {
                out.write_all(summary.render(QueryRenderMode::PlainText).as_bytes())?
            }
            OutputFormat::Basic => out.write_all(summary.render(QueryRenderMode::Basic).as_bytes())?,
            OutputFormat::Json => write_json(out, summary)?,
        }
        Ok(())
    }

    /// Write the station listing in this format.
    pub fn write_stations<W: Write>(
        self,
        out: &mut W,
        graph: &Graph,
        palette: &ColorPalette,
    ) -> Result<()> {
        match self {
            OutputFormat::Text => {
                writeln!(
                    out,
                    "{}Station Numbers and Names:{}",
                    palette.bold, palette.reset
                )?;
                write_station_table(out, graph, palette)?;
            }
            OutputFormat::Basic => {
                for (_, name) in graph.registry().iter() {
                    writeln!(out, "{name}")?;
                }
            }
            OutputFormat::Json => write_json(out, &station_listings(graph))?,
        }
        Ok(())
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to serialise JSON output")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use transitnet_lib::{builtin_graph, run_query, QueryRequest};

    fn render_summary(format: OutputFormat) -> String {
        let graph = builtin_graph().unwrap();
        let plan = run_query(&graph, &QueryRequest::bfs(14_i64, 22_i64)).unwrap();
        let summary = QuerySummary::from_plan(&graph, &plan).unwrap();
        let mut buffer = Vec::new();
        format.write_summary(&mut buffer, &summary).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn text_summary_names_algorithm() {
        let text = render_summary(OutputFormat::Text);
        assert!(text.starts_with(
            "Shortest path using BFS: Rajiv Chowk~BY -> New Delhi~YO -> Chandni Chowk~Y"
        ));
    }

    #[test]
    fn basic_summary_lists_stations() {
        assert_eq!(
            render_summary(OutputFormat::Basic),
            "+ Rajiv Chowk~BY\n| New Delhi~YO\n- Chandni Chowk~Y\n"
        );
    }

    #[test]
    fn json_summary_is_valid_json() {
        let value: serde_json::Value =
            serde_json::from_str(&render_summary(OutputFormat::Json)).unwrap();
        assert_eq!(value["algorithm"], "bfs");
        assert_eq!(value["hops"], 2);
    }

    #[test]
    fn plain_station_table_has_no_escape_codes() {
        let graph = builtin_graph().unwrap();
        let mut buffer = Vec::new();
        write_station_table(&mut buffer, &graph, &ColorPalette::plain()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("10: Noida Sector 62~B\n"));
        assert!(!text.contains('\x1b'));
        assert_eq!(text.lines().count(), 20);
    }

    #[test]
    fn json_station_listing_is_ordered() {
        let graph = builtin_graph().unwrap();
        let mut buffer = Vec::new();
        OutputFormat::Json
            .write_stations(&mut buffer, &graph, &ColorPalette::plain())
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[0]["id"], 10);
        assert_eq!(value[19]["name"], "Netaji Subhash Place~PR");
    }
}
