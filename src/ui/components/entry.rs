//! Entry bar component renderer.
//!
//! A three-line framed box holding the text typed for a new item:
//!
//! ```text
//! [margin] ┌──────────────────┐ [margin]
//! [margin] │ Add item: eggs_  │ [margin]
//! [margin] └──────────────────┘ [margin]
//! ```

use crate::ui::helpers::{position_cursor, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EntryBarInfo;

const ENTRY_BOX_MARGIN: usize = 5;

/// Renders the entry box and returns the row after it.
pub fn render_entry_bar(row: usize, entry: &EntryBarInfo, theme: &Theme, cols: usize) -> usize {
    let inner_width = cols.saturating_sub(ENTRY_BOX_MARGIN * 2 + 2);
    let margin = " ".repeat(ENTRY_BOX_MARGIN);

    position_cursor(row, 1);
    print!("{margin}{}", Theme::fg(&theme.colors.entry_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let prompt = format!(" Add item: {}_", entry.text);
    let prompt: String = prompt.chars().take(inner_width).collect();

    position_cursor(row + 1, 1);
    print!("{margin}{}│", Theme::fg(&theme.colors.entry_border));
    print!("{}{prompt}", Theme::fg(&theme.colors.text_normal));
    print!("{}", " ".repeat(inner_width.saturating_sub(visual_len(&prompt))));
    print!("{}│", Theme::fg(&theme.colors.entry_border));
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{margin}{}", Theme::fg(&theme.colors.entry_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
