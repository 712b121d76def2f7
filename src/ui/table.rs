//! Table rendering for formatted output.

use console::measure_text_width;

/// A simple table for formatted output.
///
/// Cell widths are measured with [`measure_text_width`], so styled cells
/// (colored category badges, star counts) line up even with ANSI codes in
/// them. Numeric columns can be right-aligned.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
    right_aligned: Vec<bool>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();
        let right_aligned = vec![false; headers.len()];

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
            right_aligned,
        }
    }

    /// Right-align a column (for counts and other numerics).
    pub fn align_right(mut self, column: usize) -> Self {
        if column < self.right_aligned.len() {
            self.right_aligned[column] = true;
        }
        self
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<&str>) {
        let row: Vec<String> = row.iter().map(|s| s.to_string()).collect();

        for (i, cell) in row.iter().enumerate() {
            if i < self.column_widths.len() {
                self.column_widths[i] = self.column_widths[i].max(measure_text_width(cell));
            }
        }

        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_border('┌', '┬', '┐'));
        output.push('\n');

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');

        output.push_str(&self.render_border('├', '┼', '┤'));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output.push_str(&self.render_border('└', '┴', '┘'));

        output
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let mut s = String::new();
        s.push(left);

        for (i, width) in self.column_widths.iter().enumerate() {
            s.push_str(&"─".repeat(width + 2));
            if i < self.column_widths.len() - 1 {
                s.push(mid);
            }
        }

        s.push(right);
        s
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::from("│");

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
            // Pad manually: format! width specifiers count ANSI codes.
            let pad = width.saturating_sub(measure_text_width(cell));
            if self.right_aligned[i] {
                s.push_str(&format!(" {}{} │", " ".repeat(pad), cell));
            } else {
                s.push_str(&format!(" {}{} │", cell, " ".repeat(pad)));
            }
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_empty() {
        let table = Table::new(vec!["Name", "Stars"]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);

        let output = table.render();
        assert!(output.contains("Name"));
        assert!(output.contains("Stars"));
    }

    #[test]
    fn table_with_rows() {
        let mut table = Table::new(vec!["Name", "Version"]);
        table.add_row(vec!["React", "19.1.0"]);
        table.add_row(vec!["Vue", "3.5.13"]);

        assert_eq!(table.row_count(), 2);

        let output = table.render();
        assert!(output.contains("React"));
        assert!(output.contains("19.1.0"));
        assert!(output.contains("Vue"));
    }

    #[test]
    fn table_adjusts_column_width() {
        let mut table = Table::new(vec!["A"]);
        table.add_row(vec!["a_much_longer_value"]);

        let output = table.render();
        assert!(output.contains("a_much_longer_value"));
    }

    #[test]
    fn table_uses_box_drawing() {
        let table = Table::new(vec!["Test"]);
        let output = table.render();

        assert!(output.contains("┌"));
        assert!(output.contains("┐"));
        assert!(output.contains("└"));
        assert!(output.contains("┘"));
        assert!(output.contains("│"));
        assert!(output.contains("─"));
    }

    #[test]
    fn table_handles_missing_cells() {
        let mut table = Table::new(vec!["A", "B", "C"]);
        table.add_row(vec!["only", "two"]);

        let output = table.render();
        assert!(output.contains("only"));
        assert!(output.contains("two"));
    }

    #[test]
    fn right_aligned_column_pads_on_the_left() {
        let mut table = Table::new(vec!["Name", "Stars"]).align_right(1);
        table.add_row(vec!["React", "230.0K"]);
        table.add_row(vec!["Vue", "48.2K"]);

        let output = table.render();
        // The shorter count sits flush against the right edge of its column.
        assert!(output.contains("│  48.2K │"));
        assert!(output.contains("│ 230.0K │"));
    }

    #[test]
    fn styled_cells_do_not_break_alignment() {
        let styled = format!("{}", console::Style::new().blue().force_styling(true).apply_to("React"));
        let mut table = Table::new(vec!["Name"]);
        table.add_row(vec![&styled]);
        table.add_row(vec!["Vue"]);

        let output = table.render();
        // Every border line has the same display width as the data rows.
        let widths: Vec<usize> = output.lines().map(measure_text_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn table_render_consistency() {
        let mut table = Table::new(vec!["Name", "Version", "Stars"]);
        table.add_row(vec!["React", "19.1.0", "230.0K"]);
        table.add_row(vec!["Vue", "3.5.13", "48.2K"]);
        table.add_row(vec!["Svelte", "5.19.0", "81.5K"]);

        let output = table.render();
        let lines: Vec<_> = output.lines().collect();

        // Top border, header, separator, 3 data rows, bottom border.
        assert_eq!(lines.len(), 7);
    }
}
