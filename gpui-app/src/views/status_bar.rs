use gpui::*;
use gpui::prelude::FluentBuilder;

use crate::app::{Spreadsheet, STATUS_BAR_HEIGHT};
use crate::ui::Button;

/// Render the bottom status bar: mode + messages on the left, active cell
/// address and the save button on the right
pub fn render_status_bar(app: &Spreadsheet, cx: &mut Context<Spreadsheet>) -> impl IntoElement {
    let mode_text = if app.mode.is_editing() { "Edit" } else { "Ready" };
    let status_message = app.status_message.clone();
    let cell_ref = app.active_cell_ref();

    div()
        .flex_shrink_0()
        .h(px(STATUS_BAR_HEIGHT))
        .bg(app.theme.status_bg)
        .border_t_1()
        .border_color(app.theme.status_border)
        .flex()
        .items_center()
        .justify_between()
        .px_2()
        .text_size(px(12.0))
        .text_color(app.theme.status_text_muted)
        .child(
            div()
                .flex()
                .items_center()
                .gap_2()
                .child(mode_text)
                .when_some(status_message, |bar, msg| {
                    bar.child(div().text_color(app.theme.status_text).child(msg))
                }),
        )
        .child(
            div()
                .flex()
                .items_center()
                .gap_2()
                .child(cell_ref)
                .child(
                    Button::new("save-btn", "Save to output.csv")
                        .primary(app.theme.accent, app.theme.text_inverse)
                        .on_mouse_down(MouseButton::Left, cx.listener(|this, _, _, cx| {
                            this.save(cx);
                        })),
                ),
        )
}
