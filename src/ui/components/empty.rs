//! Empty state component renderer.

use crate::ui::helpers::{centered, position_cursor, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered message and a dimmed subtitle below it, starting at
/// `row`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let (left, right) = centered(visual_len(&empty.message), cols);
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}{}{}", " ".repeat(left), empty.message, " ".repeat(right));
    print!("{}", Theme::reset());

    let (left, right) = centered(visual_len(&empty.subtitle), cols);
    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}{}{}", " ".repeat(left), empty.subtitle, " ".repeat(right));
    print!("{}", Theme::reset());

    row + 2
}
