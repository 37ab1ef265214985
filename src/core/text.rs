// src/core/text.rs

/// Trim without reallocating when there is nothing to trim.
pub fn trimmed(s: String) -> String {
    let t = s.trim();
    if t.len() == s.len() { s } else { s!(t) }
}

/// Shorten to at most `max` chars for one-line display, appending `…` if cut.
pub fn ellipsize(s: &str, max: usize) -> String {
    let mut out = String::with_capacity(s.len().min(max + 3));
    for (i, ch) in s.chars().enumerate() {
        if i == max {
            out.push('…');
            return out;
        }
        out.push(if ch.is_whitespace() { ' ' } else { ch });
    }
    out
}
