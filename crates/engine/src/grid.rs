use crate::cell;

/// Number of columns in the default grid.
pub const WIDTH: usize = 10;

/// Number of rows in the default grid. The last row of every column is the
/// totals row; the rows above it are data rows.
pub const HEIGHT: usize = 10;

/// A fixed-size table of text cells with a derived totals row.
///
/// Every cell holds plain text. Writing a data cell synchronously recomputes
/// that column's total: the sum of the column's data cells parsed as numbers,
/// with unparseable text contributing zero. The totals row is written only by
/// the recompute step and never triggers further recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Column-major cell text: `cells[col * rows + row]`.
    cells: Vec<String>,
    cols: usize,
    rows: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

impl Grid {
    /// Create a grid with every cell empty. Totals stay empty until the
    /// first edit touches their column.
    pub fn new(cols: usize, rows: usize) -> Self {
        assert!(cols > 0 && rows > 1, "grid needs at least one data row");
        Self {
            cells: vec![String::new(); cols * rows],
            cols,
            rows,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The totals row is the last row of the grid; it is not user-editable.
    pub fn is_total_row(&self, row: usize) -> bool {
        row + 1 == self.rows
    }

    pub fn cell_text(&self, col: usize, row: usize) -> &str {
        &self.cells[self.index(col, row)]
    }

    /// Current text of a column's total cell ("" until the column is edited).
    pub fn column_total(&self, col: usize) -> &str {
        self.cell_text(col, self.rows - 1)
    }

    /// Store `text` in a cell. A write to a data row retotals its column;
    /// a write to the totals row just stores the text — that exclusion is
    /// what lets the recompute step write totals through this same path
    /// without recursing.
    pub fn set_cell_text(&mut self, col: usize, row: usize, text: &str) {
        let idx = self.index(col, row);
        self.cells[idx] = text.to_string();
        if !self.is_total_row(row) {
            self.recompute_column_total(col);
        }
    }

    /// Recompute one column's total from its data rows and store it.
    pub fn recompute_column_total(&mut self, col: usize) {
        let mut sum = 0.0;
        for row in 0..self.rows - 1 {
            if let Some(n) = cell::parse_number(self.cell_text(col, row)) {
                sum += n;
            }
        }
        let total = cell::format_number(sum);
        self.set_cell_text(col, self.rows - 1, &total);
    }

    fn index(&self, col: usize, row: usize) -> usize {
        debug_assert!(col < self.cols && row < self.rows);
        col * self.rows + row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_empty() {
        let grid = Grid::default();
        for col in 0..grid.cols() {
            for row in 0..grid.rows() {
                assert_eq!(grid.cell_text(col, row), "");
            }
        }
    }

    #[test]
    fn test_edit_retotals_column() {
        let mut grid = Grid::default();
        grid.set_cell_text(2, 0, "10");
        assert_eq!(grid.column_total(2), "10");
        grid.set_cell_text(2, 1, "5.5");
        assert_eq!(grid.column_total(2), "15.5");
    }

    #[test]
    fn test_non_numeric_contributes_zero() {
        let mut grid = Grid::default();
        grid.set_cell_text(0, 0, "3");
        grid.set_cell_text(0, 1, "hello");
        grid.set_cell_text(0, 2, "4.5");
        assert_eq!(grid.column_total(0), "7.5");
    }

    #[test]
    fn test_mixed_column_example() {
        // 5 data rows + totals row: "1", "2", "x", "", "4" sums to 7
        let mut grid = Grid::new(1, 6);
        grid.set_cell_text(0, 0, "1");
        grid.set_cell_text(0, 1, "2");
        grid.set_cell_text(0, 2, "x");
        grid.set_cell_text(0, 3, "");
        grid.set_cell_text(0, 4, "4");
        assert_eq!(grid.column_total(0), "7");
    }

    #[test]
    fn test_overwrite_replaces_contribution() {
        let mut grid = Grid::default();
        grid.set_cell_text(1, 0, "100");
        grid.set_cell_text(1, 0, "2");
        assert_eq!(grid.column_total(1), "2");
        grid.set_cell_text(1, 0, "oops");
        assert_eq!(grid.column_total(1), "0");
    }

    #[test]
    fn test_clearing_a_cell_retotals() {
        let mut grid = Grid::default();
        grid.set_cell_text(0, 0, "8");
        grid.set_cell_text(0, 1, "2");
        grid.set_cell_text(0, 1, "");
        assert_eq!(grid.column_total(0), "8");
    }

    #[test]
    fn test_columns_are_independent() {
        let mut grid = Grid::default();
        grid.set_cell_text(0, 0, "1");
        grid.set_cell_text(3, 0, "9");
        assert_eq!(grid.column_total(0), "1");
        assert_eq!(grid.column_total(3), "9");
        // Untouched columns keep an empty total
        assert_eq!(grid.column_total(1), "");
    }

    #[test]
    fn test_total_row_write_does_not_retotal() {
        let mut grid = Grid::default();
        grid.set_cell_text(0, 0, "5");
        let total_row = grid.rows() - 1;
        // A direct write to the totals row stores the text and nothing else
        grid.set_cell_text(0, total_row, "not a total");
        assert_eq!(grid.cell_text(0, total_row), "not a total");
        assert_eq!(grid.cell_text(0, 0), "5");
        // The next data edit restores the derived value
        grid.set_cell_text(0, 1, "3");
        assert_eq!(grid.column_total(0), "8");
    }

    #[test]
    fn test_negative_and_exponent_inputs() {
        let mut grid = Grid::default();
        grid.set_cell_text(0, 0, "-2.5");
        grid.set_cell_text(0, 1, "1e2");
        assert_eq!(grid.column_total(0), "97.5");
    }

    #[test]
    fn test_whitespace_numeric_counts() {
        let mut grid = Grid::default();
        grid.set_cell_text(0, 0, "  12 ");
        assert_eq!(grid.column_total(0), "12");
    }
}
