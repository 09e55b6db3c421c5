pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

/// Splits a comma-separated header value, trimming entries and dropping blanks.
pub(crate) fn split_comma_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}

/// Keeps the first spelling of each value, comparing case-insensitively.
pub(crate) fn dedup_ignore_case<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut deduped: Vec<String> = Vec::new();
    for value in values {
        let trimmed = value.into().trim().to_string();
        if deduped
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(&trimmed))
        {
            continue;
        }
        deduped.push(trimmed);
    }
    deduped
}

/// Escapes regex metacharacters so `literal` matches itself.
pub(crate) fn escape_regex(literal: &str) -> String {
    let mut escaped = String::with_capacity(literal.len() + 8);
    for ch in literal.chars() {
        if matches!(
            ch,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$'
        ) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
