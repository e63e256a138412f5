/// Translate spreadsheet column letters into a zero-based column index.
/// `A` is 0, `Z` is 25, `AA` is 26. Returns `None` for anything that is not
/// a run of ASCII letters.
pub fn column_index(letters: &str) -> Option<usize> {
    let letters = letters.trim();
    if letters.is_empty() {
        return None;
    }

    let mut total = 0usize;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        // 'A' = 1 .. 'Z' = 26
        let value = (c.to_ascii_uppercase() as u8 - b'@') as usize;
        total = total.checked_mul(26)?.checked_add(value)?;
    }
    Some(total - 1)
}

/// Parse a cell's text as a number, tolerating surrounding whitespace.
pub fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}
