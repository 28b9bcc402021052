//! Footer component renderer.

use crate::ui::helpers::{centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders centered keybinding hints, truncated to the terminal width.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let hints: String = footer.keybindings.chars().take(cols).collect();
    let (left, right) = centered(hints.chars().count(), cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(left));
    print!("{hints}");
    print!("{}", " ".repeat(right));
    print!("{}", Theme::reset());
    row + 1
}
