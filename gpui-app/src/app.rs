use std::path::Path;

use gpui::*;
use tallysheet_engine::grid::Grid;
use tallysheet_io::csv;

use crate::mode::Mode;
use crate::theme::{dark_default, Theme};
use crate::views;

// Grid geometry (logical pixels)
pub const CELL_WIDTH: f32 = 96.0;
pub const CELL_HEIGHT: f32 = 26.0;
pub const HEADER_WIDTH: f32 = 56.0;
pub const STATUS_BAR_HEIGHT: f32 = 30.0;

/// Export destination, resolved against the working directory.
pub const OUTPUT_FILE: &str = "output.csv";

/// Root view: the grid, the selection, and the in-cell editor.
///
/// Edits write through to the grid on every keystroke, so column totals
/// track live and a save never has pending state to flush.
pub struct Spreadsheet {
    pub grid: Grid,
    /// Active cell as (row, col)
    pub selected: (usize, usize),
    pub mode: Mode,
    pub edit_value: String,
    edit_original: String,
    pub status_message: Option<String>,
    pub theme: Theme,
    pub focus_handle: FocusHandle,
}

impl Spreadsheet {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle, cx);
        window.set_window_title("TallySheet");

        Self {
            grid: Grid::default(),
            selected: (0, 0),
            mode: Mode::Navigation,
            edit_value: String::new(),
            edit_original: String::new(),
            status_message: None,
            theme: dark_default(),
            focus_handle,
        }
    }

    /// Column header label ("A", "B", ...)
    pub fn col_letter(col: usize) -> String {
        ((b'A' + (col % 26) as u8) as char).to_string()
    }

    /// Active cell address for the status bar ("B3", or "B Total")
    pub fn active_cell_ref(&self) -> String {
        let (row, col) = self.selected;
        if self.grid.is_total_row(row) {
            format!("{} Total", Self::col_letter(col))
        } else {
            format!("{}{}", Self::col_letter(col), row + 1)
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn move_selection(&mut self, dr: i32, dc: i32, cx: &mut Context<Self>) {
        self.finish_edit();
        let (row, col) = self.selected;
        let max_row = self.grid.rows() as i32 - 1;
        let max_col = self.grid.cols() as i32 - 1;
        self.selected = (
            (row as i32 + dr).clamp(0, max_row) as usize,
            (col as i32 + dc).clamp(0, max_col) as usize,
        );
        self.status_message = None;
        cx.notify();
    }

    pub fn select_cell(&mut self, row: usize, col: usize, cx: &mut Context<Self>) {
        if self.selected != (row, col) {
            self.finish_edit();
            self.selected = (row, col);
        }
        self.status_message = None;
        cx.notify();
    }

    pub fn tab_next(&mut self, cx: &mut Context<Self>) {
        self.finish_edit();
        let (row, col) = self.selected;
        self.selected = if col + 1 < self.grid.cols() {
            (row, col + 1)
        } else if row + 1 < self.grid.rows() {
            (row + 1, 0)
        } else {
            (0, 0)
        };
        self.status_message = None;
        cx.notify();
    }

    pub fn tab_prev(&mut self, cx: &mut Context<Self>) {
        self.finish_edit();
        let (row, col) = self.selected;
        self.selected = if col > 0 {
            (row, col - 1)
        } else if row > 0 {
            (row - 1, self.grid.cols() - 1)
        } else {
            (self.grid.rows() - 1, self.grid.cols() - 1)
        };
        self.status_message = None;
        cx.notify();
    }

    // =========================================================================
    // Editing
    // =========================================================================

    pub fn start_edit(&mut self, cx: &mut Context<Self>) {
        if self.mode.is_editing() {
            return;
        }
        let (row, col) = self.selected;
        if self.grid.is_total_row(row) {
            self.status_message = Some("Totals row is read-only".to_string());
            cx.notify();
            return;
        }
        self.edit_original = self.grid.cell_text(col, row).to_string();
        self.edit_value = self.edit_original.clone();
        self.mode = Mode::Edit;
        self.status_message = None;
        cx.notify();
    }

    /// Start editing with `text` replacing the cell's content (typing in
    /// navigation mode, Excel-style).
    pub fn start_edit_replacing(&mut self, text: &str, cx: &mut Context<Self>) {
        let (row, col) = self.selected;
        if self.grid.is_total_row(row) {
            self.status_message = Some("Totals row is read-only".to_string());
            cx.notify();
            return;
        }
        self.edit_original = self.grid.cell_text(col, row).to_string();
        self.edit_value = text.to_string();
        self.mode = Mode::Edit;
        self.status_message = None;
        self.write_through();
        cx.notify();
    }

    pub fn insert_char(&mut self, c: char, cx: &mut Context<Self>) {
        if self.mode.is_editing() {
            self.edit_value.push(c);
            self.write_through();
            cx.notify();
        } else {
            // Start editing with this character
            self.start_edit_replacing(&c.to_string(), cx);
        }
    }

    pub fn backspace_char(&mut self, cx: &mut Context<Self>) {
        if self.mode.is_editing() {
            self.edit_value.pop();
            self.write_through();
            cx.notify();
        } else {
            // On a cell: clear it and continue with an empty edit
            self.start_edit_replacing("", cx);
        }
    }

    pub fn delete_cell(&mut self, cx: &mut Context<Self>) {
        if self.mode.is_editing() {
            return;
        }
        let (row, col) = self.selected;
        if self.grid.is_total_row(row) {
            self.status_message = Some("Totals row is read-only".to_string());
            cx.notify();
            return;
        }
        self.grid.set_cell_text(col, row, "");
        cx.notify();
    }

    pub fn confirm_edit(&mut self, cx: &mut Context<Self>) {
        if self.mode.is_editing() {
            self.move_selection(1, 0, cx);
        } else {
            self.start_edit(cx);
        }
    }

    pub fn confirm_edit_up(&mut self, cx: &mut Context<Self>) {
        if self.mode.is_editing() {
            self.move_selection(-1, 0, cx);
        } else {
            self.start_edit(cx);
        }
    }

    pub fn cancel_edit(&mut self, cx: &mut Context<Self>) {
        if !self.mode.is_editing() {
            return;
        }
        let (row, col) = self.selected;
        self.grid.set_cell_text(col, row, &self.edit_original);
        self.finish_edit();
        cx.notify();
    }

    pub fn paste(&mut self, cx: &mut Context<Self>) {
        let text = match cx.read_from_clipboard().and_then(|item| item.text().map(|s| s.to_string())) {
            Some(text) => text,
            None => return,
        };
        // Strip control characters; a pasted newline would smear one cell
        // across several rows of the exported file
        let clean: String = text.trim().chars().filter(|c| !c.is_control()).collect();
        if clean.is_empty() {
            return;
        }
        if self.mode.is_editing() {
            self.edit_value.push_str(&clean);
            self.write_through();
            cx.notify();
        } else {
            self.start_edit_replacing(&clean, cx);
        }
    }

    // Leave edit mode. The grid already holds the buffer (writes go through
    // on every keystroke), so there is nothing to commit.
    fn finish_edit(&mut self) {
        self.mode = Mode::Navigation;
        self.edit_value.clear();
        self.edit_original.clear();
    }

    fn write_through(&mut self) {
        let (row, col) = self.selected;
        self.grid.set_cell_text(col, row, &self.edit_value);
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Overwrite output.csv with the current grid. Success shows nothing and
    /// failure surfaces nowhere in the UI (matching how the file has always
    /// been written); failures do go to the log.
    pub fn save(&mut self, _cx: &mut Context<Self>) {
        if let Err(e) = csv::export(&self.grid, Path::new(OUTPUT_FILE)) {
            log::warn!("failed to write {}: {}", OUTPUT_FILE, e);
        }
    }
}

impl Render for Spreadsheet {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        views::render_spreadsheet(self, cx)
    }
}
