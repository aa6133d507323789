/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            header: header.into(),
            alignment,
        }
    }
}

/// Plain-text table sized to its widest cell per column.
#[derive(Clone, Debug, Default)]
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    /// Rows rendered after a rule, e.g. totals.
    pub footer: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            footer: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn push_footer(&mut self, row: Vec<String>) {
        self.footer.push(row);
    }

    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                self.rows
                    .iter()
                    .chain(self.footer.iter())
                    .filter_map(|row| row.get(idx))
                    .map(|cell| visible_width(cell))
                    .fold(visible_width(&column.header), usize::max)
            })
            .collect()
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        self.columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(idx, (column, width))| {
                let cell = row.get(idx).map(String::as_str).unwrap_or("");
                pad(cell, *width, column.alignment)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    }

    fn rule(widths: &[usize]) -> String {
        let total = widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2;
        "-".repeat(total)
    }

    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        let mut lines = vec![self.render_row(&headers, &widths), Self::rule(&widths)];
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        if !self.footer.is_empty() {
            lines.push(Self::rule(&widths));
            lines.extend(self.footer.iter().map(|row| self.render_row(row, &widths)));
        }
        lines.join("\n")
    }
}

fn pad(cell: &str, width: usize, alignment: Alignment) -> String {
    let fill = " ".repeat(width.saturating_sub(visible_width(cell)));
    match alignment {
        Alignment::Left => format!("{cell}{fill}"),
        Alignment::Right => format!("{fill}{cell}"),
    }
}

/// Terminal column count of `text`, skipping ANSI escape sequences and
/// counting pictographs as two columns.
pub fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for ch in text.chars() {
        if in_escape {
            if ch.is_ascii_alphabetic() {
                in_escape = false;
            }
            continue;
        }
        match ch {
            '\u{1b}' => in_escape = true,
            '\u{1F300}'..='\u{1FAFF}' => width += 2,
            _ => width += 1,
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_ansi_and_doubles_emoji() {
        assert_eq!(visible_width("\u{1b}[32mok\u{1b}[0m"), 2);
        assert_eq!(visible_width("🛒 Necessities"), 14);
    }

    #[test]
    fn renders_aligned_columns_with_footer() {
        let mut table = Table::new(vec![
            TableColumn::new("Jar", Alignment::Left),
            TableColumn::new("Amount", Alignment::Right),
        ]);
        table.push_row(vec!["Play".into(), "100".into()]);
        table.push_row(vec!["Necessities".into(), "5,500".into()]);
        table.push_footer(vec!["Total".into(), "5,600".into()]);

        let expected = [
            "Jar          Amount",
            "-------------------",
            "Play            100",
            "Necessities   5,500",
            "-------------------",
            "Total         5,600",
        ]
        .join("\n");
        assert_eq!(table.render(), expected);
    }
}
