use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Splits `text` into display rows no wider than `width` columns.
///
/// Every `\n` starts a new row (a trailing newline yields an empty last row)
/// and long lines are broken at the column limit.
pub fn wrap_rows(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for line in text.split('\n') {
        let mut row = String::new();
        let mut row_width = 0;
        for ch in line.chars() {
            let w = ch.width().unwrap_or(0);
            if row_width + w > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(ch);
            row_width += w;
        }
        rows.push(row);
    }
    rows
}

/// Horizontal scroll and cursor column for a single-line input showing
/// `text_width` columns in a box `inner_width` wide. One column is kept free
/// after the text for the cursor.
pub fn input_scroll(text_width: usize, inner_width: usize) -> (usize, usize) {
    if inner_width == 0 {
        return (0, 0);
    }
    let offset = (text_width + 1).saturating_sub(inner_width);
    (offset, text_width - offset)
}

pub fn display_width(text: &str) -> usize {
    text.width()
}
