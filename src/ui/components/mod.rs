//! Composable terminal components.
//!
//! Both layouts share the same frame; entry mode adds the three-line entry
//! box under the header.
//!
//! ```text
//! [blank]            [blank]
//! [header]           [header]
//! [border]           [border]
//!                    [entry box x3]
//! [list heading]     [list heading]
//! [rows / empty]     [rows / empty]
//! [border]           [border]
//! [footer]           [footer]
//! ```

mod empty;
mod entry;
mod footer;
mod header;
mod list;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EntryBarInfo, UIViewModel};

use empty::render_empty_state;
use entry::render_entry_bar;
use footer::render_footer;
use header::render_header;
use list::{render_list_heading, render_list_rows};

fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Header, list, and footer.
pub fn render_normal_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    render_body(current_row, vm, theme, cols);
    render_bottom(vm, theme, cols, rows);
}

/// Header, entry box, list, and footer.
pub fn render_entry_mode(
    vm: &UIViewModel,
    entry: &EntryBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_entry_bar(current_row, entry, theme, cols);
    render_body(current_row, vm, theme, cols);
    render_bottom(vm, theme, cols, rows);
}

fn render_body(row: usize, vm: &UIViewModel, theme: &Theme, cols: usize) {
    if let Some(empty) = &vm.empty_state {
        render_empty_state(row + 2, empty, theme, cols);
        return;
    }
    let row = render_list_heading(row, theme);
    render_list_rows(row, &vm.display_items, theme, cols);
}

fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1);
    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
