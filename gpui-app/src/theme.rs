//! Color tokens for the app.
//!
//! One built-in dark theme; there is no user theming and no settings
//! surface, so tokens live in a plain struct instead of a lookup table.

use gpui::Hsla;

/// Helper to create Hsla from hex RGB
pub fn rgb(hex: u32) -> Hsla {
    gpui::rgb(hex).into()
}

#[derive(Debug, Clone)]
pub struct Theme {
    // App surfaces
    pub app_bg: Hsla,
    pub text_inverse: Hsla,

    // Grid surfaces
    pub grid_bg: Hsla,
    pub grid_lines: Hsla,
    pub cell_text: Hsla,
    pub cell_text_muted: Hsla,
    pub editor_bg: Hsla,

    // Headers
    pub header_bg: Hsla,
    pub header_border: Hsla,
    pub header_text: Hsla,

    // Status + chrome
    pub status_bg: Hsla,
    pub status_border: Hsla,
    pub status_text: Hsla,
    pub status_text_muted: Hsla,

    // Semantic feedback
    pub accent: Hsla,
}

pub fn dark_default() -> Theme {
    Theme {
        app_bg: rgb(0x1e1e1e),
        text_inverse: rgb(0xffffff),

        grid_bg: rgb(0x1e1e1e),
        grid_lines: rgb(0x3d3d3d),
        cell_text: rgb(0xcccccc),
        cell_text_muted: rgb(0x858585),
        editor_bg: rgb(0x252526),

        header_bg: rgb(0x252526),
        header_border: rgb(0x3d3d3d),
        header_text: rgb(0x858585),

        status_bg: rgb(0x252526),
        status_border: rgb(0x3d3d3d),
        status_text: rgb(0xcccccc),
        status_text_muted: rgb(0x858585),

        accent: rgb(0x007acc),
    }
}
