//! Plain-text table rendering for terminal output.

use std::fmt::Write as _;

use subintel_core::FormattedTable;

/// Left-aligned columns padded to their widest cell, with a rule under the header.
pub(crate) fn render_table(table: &FormattedTable) -> String {
    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.chars().count()).collect();
    for row in &table.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &table.columns, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &table.rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{}", line.trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str], rows: &[&[&str]]) -> FormattedTable {
        FormattedTable {
            columns: columns.iter().map(|c| (*c).to_owned()).collect(),
            rows: rows.iter().map(|r| r.iter().map(|c| (*c).to_owned()).collect()).collect(),
        }
    }

    #[test]
    fn pads_to_widest_cell() {
        let rendered = render_table(&table(
            &["campaign", "revenue"],
            &[&["email", "$120"], &["brand_awareness", "$1,000"]],
        ));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "campaign         revenue");
        assert_eq!(lines[1], "---------------  -------");
        assert_eq!(lines[2], "email            $120");
        assert_eq!(lines[3], "brand_awareness  $1,000");
    }

    #[test]
    fn header_only_for_no_rows() {
        let rendered = render_table(&table(&["touches"], &[]));
        assert_eq!(rendered, "touches\n-------\n");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let rendered = render_table(&table(&["plan"], &[&["année"]]));
        assert_eq!(rendered.lines().nth(1), Some("-----"));
    }
}
