//! Numbered interactive menu over a loaded network.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::debug;

use transitnet_lib::{
    run_query, Graph, QueryAlgorithm, QueryRenderMode, QueryRequest, QuerySummary, StationRef,
};

use crate::failure::query_failure;
use crate::output::write_station_table;
use crate::terminal::ColorPalette;

const SEPARATOR: &str = "----------------------------------";

/// Interactive loop: pick an algorithm, enter two stations, read the answer.
pub struct Menu<'a> {
    graph: &'a Graph,
    title: String,
    palette: ColorPalette,
}

impl<'a> Menu<'a> {
    pub fn new(graph: &'a Graph, title: impl Into<String>, palette: ColorPalette) -> Self {
        Self {
            graph,
            title: title.into(),
            palette,
        }
    }

    /// Run until the user chooses to exit or input ends.
    ///
    /// Query failures are reported inline and the loop continues.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<()> {
        let p = &self.palette;
        writeln!(
            output,
            "{}------Welcome to {}------{}",
            p.bold, self.title, p.reset
        )?;

        loop {
            self.write_options(&mut output)?;
            let Some(choice) = prompt(&mut input, &mut output, "Enter your choice (1/2/3/4/5): ")?
            else {
                writeln!(output)?;
                return Ok(());
            };

            let algorithm = match choice.as_str() {
                "1" => QueryAlgorithm::Bfs,
                "2" => QueryAlgorithm::Dijkstra,
                "3" => QueryAlgorithm::Prim,
                "4" => QueryAlgorithm::Kruskal,
                "5" => {
                    writeln!(output, "Exiting the program. Goodbye!")?;
                    return Ok(());
                }
                other => {
                    debug!(choice = other, "rejected menu choice");
                    writeln!(output, "Invalid choice. Please enter a valid option.")?;
                    continue;
                }
            };

            let Some(start) = prompt(&mut input, &mut output, "Enter the start station number: ")?
            else {
                return Ok(());
            };
            let Some(goal) = prompt(&mut input, &mut output, "Enter the end station number: ")?
            else {
                return Ok(());
            };

            writeln!(output, "{SEPARATOR}")?;
            match self.answer(algorithm, &start, &goal) {
                Ok(text) => output.write_all(text.as_bytes())?,
                Err(err) => writeln!(output, "{}Error:{} {err:#}", p.red, p.reset)?,
            }
        }
    }

    fn write_options<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let p = &self.palette;
        writeln!(output)?;
        writeln!(output, "{}Menu:{}", p.bold, p.reset)?;
        writeln!(output, "1. Shortest path using BFS algorithm")?;
        writeln!(output, "2. Shortest distance using Dijkstra's Algorithm")?;
        writeln!(output, "3. Shortest Time using Prim's Algorithm")?;
        writeln!(output, "4. Minimum Cost using Kruskal's Algorithm")?;
        writeln!(output, "5. Exit")?;
        writeln!(output)?;
        writeln!(output, "{}Station Numbers and Names:{}", p.bold, p.reset)?;
        write_station_table(output, self.graph, p)
    }

    fn answer(&self, algorithm: QueryAlgorithm, start: &str, goal: &str) -> anyhow::Result<String> {
        let request = QueryRequest::new(
            algorithm,
            parse_station(start),
            parse_station(goal),
        );
        let plan = run_query(self.graph, &request).map_err(|err| query_failure(self.graph, err))?;
        let summary =
            QuerySummary::from_plan(self.graph, &plan).context("failed to summarise query")?;
        Ok(summary.render(QueryRenderMode::PlainText))
    }
}

fn parse_station(value: &str) -> StationRef {
    match value.parse::<StationRef>() {
        Ok(station) => station,
        Err(never) => match never {},
    }
}

/// Print `message` and read one trimmed line; `None` once input is exhausted.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use transitnet_lib::builtin_graph;

    fn run_session(script: &str) -> String {
        let graph = builtin_graph().unwrap();
        let menu = Menu::new(&graph, "Delhi Metro", ColorPalette::plain());
        let mut output = Vec::new();
        menu.run(Cursor::new(script.as_bytes()), &mut output)
            .expect("menu runs");
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn exit_choice_says_goodbye() {
        let transcript = run_session("5\n");
        assert!(transcript.starts_with("------Welcome to Delhi Metro------\n"));
        assert!(transcript.contains("10: Noida Sector 62~B"));
        assert!(transcript.ends_with("Exiting the program. Goodbye!\n"));
    }

    #[test]
    fn invalid_choice_repeats_menu() {
        let transcript = run_session("9\n5\n");
        assert!(transcript.contains("Invalid choice. Please enter a valid option."));
        assert_eq!(transcript.matches("Menu:").count(), 2);
    }

    #[test]
    fn dijkstra_choice_reports_distance() {
        let transcript = run_session("2\n10\n26\n5\n");
        assert!(transcript.contains(SEPARATOR));
        assert!(transcript.contains("Total distance: 42 km"));
    }

    #[test]
    fn stations_can_be_entered_by_label() {
        let transcript = run_session("4\nRajiv Chowk~BY\nChandni Chowk~Y\n5\n");
        assert!(transcript.contains("Total cost: ₹67"));
    }

    #[test]
    fn bad_station_reports_error_and_continues() {
        let transcript = run_session("1\n10\n99\n5\n");
        assert!(transcript.contains("Error: Station number 99 is not part of the network."));
        assert!(transcript.ends_with("Goodbye!\n"));
    }

    #[test]
    fn colored_palette_styles_headings_and_errors() {
        let graph = builtin_graph().unwrap();
        let menu = Menu::new(&graph, "Delhi Metro", ColorPalette::colored());
        let mut output = Vec::new();
        menu.run(Cursor::new("1\n10\n99\n5\n".as_bytes()), &mut output)
            .expect("menu runs");
        let transcript = String::from_utf8(output).unwrap();

        assert!(transcript.contains("\x1b[1mMenu:\x1b[0m"));
        assert!(transcript.contains("\x1b[90m10\x1b[0m: Noida Sector 62~B"));
        assert!(transcript.contains("\x1b[31mError:\x1b[0m Station number 99"));
    }

    #[test]
    fn end_of_input_exits_quietly() {
        let transcript = run_session("");
        assert!(!transcript.contains("Goodbye"));

        let transcript = run_session("3\n10\n");
        assert!(transcript.ends_with("Enter the end station number: "));
    }
}
