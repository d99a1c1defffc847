// src/core/sanitize.rs

/// Collapse runs of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Delete every line break, including ones in the middle of the text.
pub fn remove_newlines(s: &str) -> String {
    s.chars().filter(|&c| c != '\n' && c != '\r').collect()
}

/// Replace every line break with a single space ("\r\n" counts as one break).
pub fn newlines_to_spaces(s: &str) -> String {
    s.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Drop all occurrences of any of `chars`.
pub fn strip_chars(s: &str, chars: &[char]) -> String {
    s.chars().filter(|c| !chars.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_newlines_deletes_interior_breaks() {
        assert_eq!(remove_newlines("\n$1,2\n34\r\n"), "$1,234");
    }

    #[test]
    fn newlines_to_spaces_keeps_words_apart() {
        assert_eq!(newlines_to_spaces("Bitcoin\nCash"), "Bitcoin Cash");
        assert_eq!(newlines_to_spaces("Bitcoin\r\nCash"), "Bitcoin Cash");
    }

    #[test]
    fn strip_chars_removes_every_occurrence() {
        assert_eq!(strip_chars("$1,234,567.89", &['$', ',']), "1234567.89");
        assert_eq!(strip_chars("-3.25%", &['%']), "-3.25");
    }

    #[test]
    fn normalize_ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  Bitcoin \n  Cash "), "Bitcoin Cash");
    }
}
