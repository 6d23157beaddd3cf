use gpui::{App, KeyBinding};

use crate::actions::*;

/// Primary modifier key string for the platform.
fn primary_mod() -> &'static str {
    #[cfg(target_os = "macos")]
    {
        "cmd"
    }
    #[cfg(not(target_os = "macos"))]
    {
        "ctrl"
    }
}

/// Register all keybindings for the application
pub fn register(cx: &mut App) {
    let m = primary_mod();

    cx.bind_keys([
        // Navigation (in Spreadsheet context)
        KeyBinding::new("up", MoveUp, Some("Spreadsheet")),
        KeyBinding::new("down", MoveDown, Some("Spreadsheet")),
        KeyBinding::new("left", MoveLeft, Some("Spreadsheet")),
        KeyBinding::new("right", MoveRight, Some("Spreadsheet")),

        // Editing
        KeyBinding::new("f2", StartEdit, Some("Spreadsheet")),
        KeyBinding::new("enter", ConfirmEdit, Some("Spreadsheet")),
        KeyBinding::new("shift-enter", ConfirmEditUp, Some("Spreadsheet")),
        KeyBinding::new("tab", TabNext, Some("Spreadsheet")),
        KeyBinding::new("shift-tab", TabPrev, Some("Spreadsheet")),
        KeyBinding::new("escape", CancelEdit, Some("Spreadsheet")),
        KeyBinding::new("backspace", BackspaceChar, Some("Spreadsheet")),
        KeyBinding::new("delete", DeleteCell, Some("Spreadsheet")),

        // Clipboard
        KeyBinding::new(&format!("{}-v", m), Paste, Some("Spreadsheet")),

        // File
        KeyBinding::new(&format!("{}-s", m), Save, Some("Spreadsheet")),
    ]);
}
