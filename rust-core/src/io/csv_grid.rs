// Plain CSV grid codec: one row per line, comma-separated identifiers, no header

use crate::error::RucError;
use crate::grid::Grid;
use crate::materials::MaterialId;

/// Render each row as comma-separated identifiers, one row per line
pub fn encode(grid: &Grid) -> String {
    let mut text = String::with_capacity(grid.len() * 2);
    for row in 0..grid.ng() {
        let items: Vec<String> = grid.row(row).map(|id| id.to_string()).collect();
        text.push_str(&items.join(","));
        text.push('\n');
    }
    text
}

/// Parse CSV text into a grid.
///
/// Blank lines are skipped and tokens are trimmed before parsing. Every line
/// must hold as many tokens as the first one.
pub fn decode(text: &str) -> Result<Grid, RucError> {
    let mut rows: Vec<Vec<MaterialId>> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_number = index + 1;

        let row = line
            .split(',')
            .map(|token| {
                let token = token.trim();
                token.parse::<MaterialId>().map_err(|_| {
                    RucError::Format(format!("line {}: '{}' is not an integer", line_number, token))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(RucError::Format(format!(
                    "line {}: expected {} columns, found {}",
                    line_number,
                    first.len(),
                    row.len()
                )));
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(RucError::Format("CSV input holds no rows".to_string()));
    }
    Grid::from_rows(rows)
}
