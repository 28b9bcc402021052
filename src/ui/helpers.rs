//! Shared rendering utilities.

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Left and right padding that centers `len` characters in `cols`.
///
/// ```rust
/// use shoplist::ui::helpers::centered;
///
/// assert_eq!(centered(4, 10), (3, 3));
/// assert_eq!(centered(5, 10), (2, 3));
/// assert_eq!(centered(20, 10), (0, 0));
/// ```
#[must_use]
pub const fn centered(len: usize, cols: usize) -> (usize, usize) {
    let left = cols.saturating_sub(len) / 2;
    (left, cols.saturating_sub(left + len))
}

/// Character count, for padding text that may contain non-ASCII names.
#[must_use]
pub fn visual_len(text: &str) -> usize {
    text.chars().count()
}
