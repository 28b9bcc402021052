//! Shopping list rows.
//!
//! Each row is a check box followed by the item name. Checked names are
//! struck through in the theme's `checked_fg`; the selected row is drawn
//! with the selection colors across the full width.

use crate::ui::helpers::{position_cursor, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Renders the column heading and returns the next row.
pub fn render_list_heading(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("  {:<5} {}", "DONE", "ITEM");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every row in `items` starting at `row`.
pub fn render_list_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    items
        .iter()
        .fold(row, |current, item| render_list_row(current, item, theme, cols))
}

fn render_list_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base = || {
        if item.is_selected {
            format!(
                "{}{}",
                Theme::fg(&theme.colors.selection_fg),
                Theme::bg(&theme.colors.selection_bg)
            )
        } else {
            Theme::fg(&theme.colors.text_normal)
        }
    };

    let marker = if item.checked { "[x]" } else { "[ ]" };
    print!("{}  {marker}   ", base());

    if item.checked {
        print!("{}", Theme::strike());
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.checked_fg));
        }
    }
    print!("{}", item.name);
    print!("{}{}", Theme::reset(), base());

    let line_len = 8 + visual_len(&item.name);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));
    print!("{}", Theme::reset());
    row + 1
}
