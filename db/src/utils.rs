use crate::models::QUESTIONS_PER_PAGE;

/// Row offset of a 1-based page. Pages below 1 are treated as the first page;
/// `None` when the offset does not fit in an i64.
pub fn page_offset(page: i64) -> Option<i64> {
    page.max(1)
        .checked_sub(1)?
        .checked_mul(QUESTIONS_PER_PAGE)
}

// postgres uses backslash as the default LIKE escape character
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}
