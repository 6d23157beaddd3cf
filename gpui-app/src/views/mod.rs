mod grid;
mod status_bar;

use gpui::*;

use crate::actions::*;
use crate::app::Spreadsheet;

pub fn render_spreadsheet(app: &mut Spreadsheet, cx: &mut Context<Spreadsheet>) -> impl IntoElement {
    div()
        .key_context("Spreadsheet")
        .track_focus(&app.focus_handle)
        // Navigation actions
        .on_action(cx.listener(|this, _: &MoveUp, _, cx| {
            this.move_selection(-1, 0, cx);
        }))
        .on_action(cx.listener(|this, _: &MoveDown, _, cx| {
            this.move_selection(1, 0, cx);
        }))
        .on_action(cx.listener(|this, _: &MoveLeft, _, cx| {
            this.move_selection(0, -1, cx);
        }))
        .on_action(cx.listener(|this, _: &MoveRight, _, cx| {
            this.move_selection(0, 1, cx);
        }))
        // Editing actions
        .on_action(cx.listener(|this, _: &StartEdit, _, cx| {
            this.start_edit(cx);
        }))
        .on_action(cx.listener(|this, _: &ConfirmEdit, _, cx| {
            this.confirm_edit(cx);
        }))
        .on_action(cx.listener(|this, _: &ConfirmEditUp, _, cx| {
            this.confirm_edit_up(cx);
        }))
        .on_action(cx.listener(|this, _: &CancelEdit, _, cx| {
            this.cancel_edit(cx);
        }))
        .on_action(cx.listener(|this, _: &TabNext, _, cx| {
            this.tab_next(cx);
        }))
        .on_action(cx.listener(|this, _: &TabPrev, _, cx| {
            this.tab_prev(cx);
        }))
        .on_action(cx.listener(|this, _: &BackspaceChar, _, cx| {
            this.backspace_char(cx);
        }))
        .on_action(cx.listener(|this, _: &DeleteCell, _, cx| {
            this.delete_cell(cx);
        }))
        // Clipboard actions
        .on_action(cx.listener(|this, _: &Paste, _, cx| {
            this.paste(cx);
        }))
        // File actions
        .on_action(cx.listener(|this, _: &Save, _, cx| {
            this.save(cx);
        }))
        // Typed characters land here; control keys are handled by the
        // actions above and filtered out below
        .on_key_down(cx.listener(|this, event: &KeyDownEvent, _, cx| {
            if let Some(key_char) = &event.keystroke.key_char {
                if !event.keystroke.modifiers.control
                    && !event.keystroke.modifiers.alt
                    && !event.keystroke.modifiers.platform
                {
                    let printable_chars: String = key_char.chars()
                        .filter(|c| !c.is_control())
                        .collect();

                    for c in printable_chars.chars() {
                        this.insert_char(c, cx);
                    }
                }
            }
        }))
        .flex()
        .flex_col()
        .size_full()
        .bg(app.theme.app_bg)
        .child(grid::render_column_headers(app))
        .child(grid::render_grid(app, cx))
        .child(status_bar::render_status_bar(app, cx))
}
