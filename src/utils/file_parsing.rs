/// Removes one pair of matching single or double quotes around `s`.
#[inline]
pub fn strip_surrounding_quotes(s: &str) -> &str {
    for q in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(q).and_then(|rest| rest.strip_suffix(q)) {
            return inner;
        }
    }
    s
}

/// Splits `line` on `delimiter`, leaving delimiters inside quotes alone.
///
/// Fields are trimmed; quotes are kept so callers can decide whether to strip
/// them. A trailing delimiter yields a trailing empty field.
pub fn split_delimited_preserving_quotes(line: &str, delimiter: char) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes: Option<char> = None;

    for ch in line.chars() {
        match in_quotes {
            Some(q) => {
                if ch == q {
                    in_quotes = None;
                }
                cur.push(ch);
            }
            None if ch == '"' || ch == '\'' => {
                in_quotes = Some(ch);
                cur.push(ch);
            }
            None if ch == delimiter => {
                out.push(cur.trim().to_string());
                cur.clear();
            }
            None => cur.push(ch),
        }
    }
    out.push(cur.trim().to_string());
    out
}
