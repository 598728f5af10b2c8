use unicode_width::UnicodeWidthStr;

use crate::document::{Document, NodeId};
use crate::error::DomError;

/// Render the rows under `table` as aligned plain-text columns.
///
/// Every `<tr>` below `table` becomes one line; its `<th>`/`<td>` children
/// become cells separated by two spaces. Column widths are display widths,
/// so double-width glyphs still line up.
pub fn to_text(doc: &Document, table: NodeId) -> Result<String, DomError> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for id in doc.descendants(table)? {
        if doc.tag(id)? != "tr" {
            continue;
        }
        let mut cells = Vec::new();
        for &cell in doc.children(id)? {
            if matches!(doc.tag(cell)?, "td" | "th") {
                cells.push(doc.text_content(cell)?);
            }
        }
        rows.push(cells);
    }

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut out = String::new();
    for row in &rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            line.push_str(cell);
            line.push_str(&" ".repeat(widths[i] - cell.width()));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    Ok(out)
}
