use crate::models::ResultRow;
use crate::utils::{format_optional, format_pair, pad_left, MISSING};

const HEADERS: [&str; 4] = ["route_name", "area", "coordinates", "us_grade"];

/// Render matched routes as a plain-text table.
///
/// Every column is right-aligned to its widest cell and columns are separated
/// by a single space. Rows keep the order they were given in. With no rows
/// only the header line is produced.
pub fn render_table(rows: &[ResultRow]) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.route_name.clone(),
                row.area.clone(),
                format_pair(row.lnglat.as_ref()),
                format_optional(row.grade.as_deref(), MISSING),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render_line = |line: [&str; 4]| -> String {
        line.iter()
            .zip(widths)
            .map(|(cell, width)| pad_left(cell, width))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut lines = Vec::with_capacity(cells.len() + 1);
    lines.push(render_line(HEADERS));
    for line in &cells {
        lines.push(render_line([
            line[0].as_str(),
            line[1].as_str(),
            line[2].as_str(),
            line[3].as_str(),
        ]));
    }
    lines.join("\n")
}
