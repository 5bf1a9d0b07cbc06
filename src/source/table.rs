use std::collections::HashMap;

use tracing::debug;

/// A source row parsed verbatim: column name to cell text, no coercion.
pub type RawRow = HashMap<String, String>;

/// Parses delimiter-separated text into at most `preview_limit` rows, using
/// the header row to name fields. Blank lines are skipped and rows with
/// fewer cells than the header are dropped rather than raising. `None`
/// input (an absent source) yields an empty vec.
pub fn parse(text: Option<&str>, delimiter: char, preview_limit: usize) -> Vec<RawRow> {
    let Some(text) = text else {
        return Vec::new();
    };

    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let header: Vec<String> = header_line
        .split(delimiter)
        .map(|cell| cell.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    let mut dropped = 0usize;
    for line in lines {
        if rows.len() >= preview_limit {
            break;
        }
        let cells: Vec<&str> = line.split(delimiter).collect();
        if cells.len() < header.len() {
            dropped += 1;
            continue;
        }
        let row: RawRow = header
            .iter()
            .cloned()
            .zip(cells.iter().map(|cell| cell.trim().to_string()))
            .collect();
        rows.push(row);
    }
    debug!(rows = rows.len(), dropped, "table parsed");
    rows
}
