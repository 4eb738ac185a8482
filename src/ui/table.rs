//! Plain-text table for the `check` listing.

use crate::models::Record;

pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Column width is the widest cell (or header) in that column.
    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = fmt_row(&self.headers, &widths);
        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            out.push_str(&fmt_row(&cells, &widths));
        }
        out
    }
}

fn fmt_row(cells: &[&str], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(c, w)| format!("{:<width$}", c, width = *w))
        .collect();
    format!("{}\n", padded.join("  ").trim_end())
}

pub fn render_untested(untested: &[Record]) -> String {
    let mut table = Table::new(vec!["NAME", "LAST TEST", "RESULT"]);
    for r in untested {
        let name = if r.is_placeholder() {
            "(empty row)"
        } else {
            r.name.as_str()
        };
        let or_dash = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };
        table.add_row(vec![
            name.to_string(),
            or_dash(&r.last_submission_date),
            or_dash(&r.last_submission_status),
        ]);
    }
    table.render()
}
