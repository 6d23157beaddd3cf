use gpui::*;
use gpui::prelude::FluentBuilder;

use crate::app::{Spreadsheet, CELL_HEIGHT, CELL_WIDTH, HEADER_WIDTH};

/// Render the column header row (A, B, C, ...)
pub fn render_column_headers(app: &Spreadsheet) -> impl IntoElement {
    div()
        .flex()
        .flex_shrink_0()
        .h(px(CELL_HEIGHT))
        .bg(app.theme.header_bg)
        // Corner cell (empty)
        .child(header_cell(app, HEADER_WIDTH, String::new()))
        .children((0..app.grid.cols()).map(|col| {
            header_cell(app, CELL_WIDTH, Spreadsheet::col_letter(col))
        }))
}

fn header_cell(app: &Spreadsheet, width: f32, label: String) -> Div {
    div()
        .flex_shrink_0()
        .w(px(width))
        .h_full()
        .flex()
        .items_center()
        .justify_center()
        .border_1()
        .border_color(app.theme.header_border)
        .bg(app.theme.header_bg)
        .text_color(app.theme.header_text)
        .text_size(px(12.0))
        .child(label)
}

/// Render the cell grid: data rows numbered 1..N, then the totals row
pub fn render_grid(app: &Spreadsheet, cx: &mut Context<Spreadsheet>) -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .flex_shrink_0()
        .children((0..app.grid.rows()).map(|row| render_row(app, row, cx)))
}

fn render_row(app: &Spreadsheet, row: usize, cx: &mut Context<Spreadsheet>) -> impl IntoElement {
    let label = if app.grid.is_total_row(row) {
        "Totals".to_string()
    } else {
        (row + 1).to_string()
    };

    div()
        .flex()
        .flex_shrink_0()
        .h(px(CELL_HEIGHT))
        .child(header_cell(app, HEADER_WIDTH, label))
        .children((0..app.grid.cols()).map(|col| render_cell(app, row, col, cx)))
}

fn render_cell(
    app: &Spreadsheet,
    row: usize,
    col: usize,
    cx: &mut Context<Spreadsheet>,
) -> AnyElement {
    let is_active = app.selected == (row, col);
    let is_editing = app.mode.is_editing() && is_active;
    let is_total = app.grid.is_total_row(row);

    let value = if is_editing {
        app.edit_value.clone()
    } else {
        app.grid.cell_text(col, row).to_string()
    };

    let border_color = if is_active {
        app.theme.accent
    } else {
        app.theme.grid_lines
    };
    let text_color = if is_total {
        app.theme.cell_text_muted
    } else {
        app.theme.cell_text
    };
    let bg = if is_editing {
        app.theme.editor_bg
    } else {
        app.theme.grid_bg
    };
    let caret_color = app.theme.cell_text;

    let cell_row = row;
    let cell_col = col;

    div()
        .id(ElementId::Name(format!("cell-{}-{}", row, col).into()))
        .flex_shrink_0()
        .w(px(CELL_WIDTH))
        .h_full()
        .flex()
        .items_center()
        .px_1()
        .overflow_hidden()
        .bg(bg)
        .border_1()
        .border_color(border_color)
        .text_color(text_color)
        .text_size(px(13.0))
        .on_mouse_down(MouseButton::Left, cx.listener(move |this, _: &MouseDownEvent, _, cx| {
            this.select_cell(cell_row, cell_col, cx);
        }))
        .child(value)
        .when(is_editing, |cell| {
            // Caret sits after the text; in-cell editing is append-at-end
            cell.child(
                div()
                    .flex_shrink_0()
                    .w(px(1.5))
                    .h(px(CELL_HEIGHT - 10.0))
                    .bg(caret_color),
            )
        })
        .into_any_element()
}
