// *RUC encoder
//
// Generated records always carry unit H and L weights; weights read from a
// file are not reproduced.

use crate::config::{ARCHID_KEY, CANONICAL_MODEL, CONTINUATION_MARKER, MODEL_KEY, RUC_MARKER, SUPPORTED_ARCHETYPE};
use crate::error::RucError;
use crate::grid::Grid;

/// Canonical *RUC text with every list on a single line
pub fn encode(grid: &Grid) -> String {
    write_record(grid, None)
}

/// *RUC text with lists broken into continuation lines of at most
/// `items_per_line` items, each broken line ending in `&`
pub fn encode_wrapped(grid: &Grid, items_per_line: usize) -> Result<String, RucError> {
    if items_per_line == 0 {
        return Err(RucError::InvalidParameter(
            "items per line must be at least 1".to_string(),
        ));
    }
    Ok(write_record(grid, Some(items_per_line)))
}

fn write_record(grid: &Grid, items_per_line: Option<usize>) -> String {
    // Rows of the grid are the H direction, columns the L direction
    let rows = grid.ng();
    let cols = grid.nb();

    let mut text = String::new();
    text.push_str(RUC_MARKER);
    text.push('\n');
    text.push_str(&format!(
        " {}={} {}={} \n",
        MODEL_KEY, CANONICAL_MODEL, ARCHID_KEY, SUPPORTED_ARCHETYPE
    ));
    text.push_str(&format!(" NB={} NG={} \n", rows, cols));

    let unit_weights = |count: usize| vec!["1".to_string(); count];
    push_field(&mut text, "H", &unit_weights(rows), items_per_line);
    push_field(&mut text, "L", &unit_weights(cols), items_per_line);

    for row in 0..rows {
        let items: Vec<String> = grid.row(row).map(|id| id.to_string()).collect();
        push_field(&mut text, "SM", &items, items_per_line);
    }
    text
}

fn push_field(text: &mut String, key: &str, items: &[String], items_per_line: Option<usize>) {
    text.push(' ');
    text.push_str(key);
    text.push('=');

    match items_per_line {
        Some(width) if items.len() > width => {
            let lines: Vec<String> = items.chunks(width).map(|chunk| chunk.join(",")).collect();
            let separator = format!(",{}\n   ", CONTINUATION_MARKER);
            text.push_str(&lines.join(&separator));
        }
        _ => text.push_str(&items.join(",")),
    }
    text.push('\n');
}
