//! Header component renderer.

use crate::ui::helpers::{centered, position_cursor, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centered, bold title bar and returns the next row.
///
/// When completed items are hidden, the filter badge follows the title in
/// the theme's badge color.
///
/// ```text
/// [padding] Shopping List (3/4) [hiding completed] [padding]
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let badge = header
        .filter_badge
        .as_ref()
        .map(|b| format!("[{b}] "));
    let width = visual_len(&header.title) + badge.as_deref().map_or(0, visual_len);
    let (left, right) = centered(width, cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(left));
    print!("{}", header.title);
    if let Some(badge) = badge {
        print!("{}", Theme::fg(&theme.colors.filter_badge_fg));
        print!("{badge}");
    }
    print!("{}", " ".repeat(right));

    print!("{}", Theme::reset());
    row + 1
}
