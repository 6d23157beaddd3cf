// CSV export

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tallysheet_engine::grid::Grid;

/// Serialize the whole grid as comma-separated lines, one line per row,
/// every line newline-terminated (including the last).
///
/// Fields are written raw — no quoting, no escaping. A comma or newline
/// typed into a cell lands in the output verbatim, exactly as the file
/// format has always worked. Do not route this through a CSV writer; one
/// would quote those fields and change the format on disk.
pub fn to_delimited_text(grid: &Grid) -> String {
    let mut out = String::new();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            out.push_str(grid.cell_text(col, row));
            if col + 1 == grid.cols() {
                out.push('\n');
            } else {
                out.push(',');
            }
        }
    }
    out
}

/// Write the grid to `path`, fully overwriting any existing file.
pub fn export(grid: &Grid, path: &Path) -> Result<(), String> {
    let mut file = File::create(path).map_err(|e| e.to_string())?;
    file.write_all(to_delimited_text(grid).as_bytes())
        .map_err(|e| e.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_untouched_grid_shape() {
        let grid = Grid::default();
        let text = to_delimited_text(&grid);

        let lines: Vec<&str> = text.split_terminator('\n').collect();
        assert_eq!(lines.len(), grid.rows());
        for line in &lines {
            assert_eq!(line.matches(',').count(), grid.cols() - 1);
            assert_eq!(line.len(), grid.cols() - 1, "empty cells only");
        }
        // Newline-terminated, no trailing blank line
        assert!(text.ends_with('\n'));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn test_traversal_order_is_row_by_row() {
        let mut grid = Grid::new(3, 3);
        for col in 0..grid.cols() {
            for row in 0..grid.rows() {
                let marker = format!("r{}c{}", row, col);
                grid.set_cell_text(col, row, &marker);
            }
        }
        let text = to_delimited_text(&grid);

        // Parse back with a real CSV reader to check line/field structure
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());
        let records: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(records.len(), 3);
        for (row, record) in records.iter().enumerate() {
            for col in 0..3 {
                assert_eq!(record.get(col), Some(format!("r{}c{}", row, col).as_str()));
            }
        }
    }

    #[test]
    fn test_totals_land_on_last_line() {
        let mut grid = Grid::new(1, 6);
        grid.set_cell_text(0, 0, "1");
        grid.set_cell_text(0, 1, "2");
        grid.set_cell_text(0, 2, "x");
        grid.set_cell_text(0, 3, "");
        grid.set_cell_text(0, 4, "4");

        let text = to_delimited_text(&grid);
        let last = text.split_terminator('\n').last().unwrap();
        assert_eq!(last, "7");
    }

    #[test]
    fn test_export_is_idempotent() {
        let mut grid = Grid::default();
        grid.set_cell_text(0, 0, "1.5");
        grid.set_cell_text(4, 2, "note");

        assert_eq!(to_delimited_text(&grid), to_delimited_text(&grid));
    }

    #[test]
    fn test_embedded_comma_is_not_escaped() {
        let mut grid = Grid::new(2, 2);
        grid.set_cell_text(0, 0, "a,b");
        let text = to_delimited_text(&grid);

        // The raw comma splits the field; no quotes appear anywhere
        assert_eq!(text.lines().next().unwrap(), "a,b,");
        assert!(!text.contains('"'));
    }

    #[test]
    fn test_export_overwrites_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");
        fs::write(&path, "stale contents that are longer than one grid line\n").unwrap();

        let mut grid = Grid::new(2, 2);
        grid.set_cell_text(0, 0, "9");
        export(&grid, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "9,\n9,\n");
    }

    #[test]
    fn test_export_write_error_is_reported() {
        let dir = tempdir().unwrap();
        // Directory in place of a file: create fails
        let err = export(&Grid::default(), dir.path()).unwrap_err();
        assert!(!err.is_empty());
    }
}
