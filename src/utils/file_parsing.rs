use crate::error::{Id3Error, Result};

#[inline]
pub fn strip_surrounding_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 {
        let first = b[0];
        let last = b[b.len() - 1];
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Wraps `s` in quotes when it could not be read back unquoted.
pub fn quote_if_needed(s: &str) -> String {
    let needs_quotes = s.is_empty()
        || s.chars().any(|c| {
            c.is_whitespace() || matches!(c, ',' | '{' | '}' | '\'' | '"' | '%')
        });
    if !needs_quotes {
        s.to_string()
    } else if s.contains('\'') {
        format!("\"{s}\"")
    } else {
        format!("'{s}'")
    }
}

/// Splits on commas outside quotes. Fields are trimmed but keep their
/// quotes. A separator always ends a field, so `x,` yields `["x", ""]`.
pub fn split_csv_preserving_quotes(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes: Option<char> = None;
    let mut after_separator = false;

    for ch in line.chars() {
        match in_quotes {
            Some(q) => {
                if ch == q {
                    in_quotes = None;
                }
                cur.push(ch);
            }
            None => {
                if ch == '"' || ch == '\'' {
                    in_quotes = Some(ch);
                    cur.push(ch);
                } else if ch == ',' {
                    out.push(cur.trim().to_string());
                    cur.clear();
                    after_separator = true;
                } else {
                    cur.push(ch);
                }
            }
        }
    }
    if after_separator || !cur.is_empty() {
        out.push(cur.trim().to_string());
    }
    out
}

/// Splits a header line into its lowercased `@keyword` and the remainder.
pub fn split_keyword(line: &str) -> Option<(String, &str)> {
    let rest = line.strip_prefix('@')?;
    let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    Some((rest[..end].to_ascii_lowercase(), rest[end..].trim()))
}

/// Reads a possibly quoted token from the start of `s`, returning the
/// unquoted token and whatever follows it.
pub fn take_token(s: &str) -> Option<(String, &str)> {
    let s = s.trim_start();
    let first = s.chars().next()?;
    if first == '\'' || first == '"' {
        let close = s[1..].find(first)? + 1;
        Some((s[1..close].to_string(), &s[close + 1..]))
    } else {
        let end = s
            .find(|c: char| c.is_whitespace() || c == '{')
            .unwrap_or(s.len());
        Some((s[..end].to_string(), &s[end..]))
    }
}

/// Parses the body of an `@attribute` declaration (everything after the
/// keyword) into the attribute name and its nominal domain.
pub fn parse_nominal_declaration(body: &str) -> Result<(String, Vec<String>)> {
    let (name, rest) = take_token(body)
        .ok_or_else(|| Id3Error::format("attribute declaration without a name"))?;
    let declared = rest.trim();
    let inner = declared
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .ok_or_else(|| {
            Id3Error::format(format!(
                "attribute '{name}' must declare a nominal domain {{...}}, found '{declared}'"
            ))
        })?;

    let mut values = Vec::new();
    for raw in split_csv_preserving_quotes(inner) {
        let label = strip_surrounding_quotes(&raw);
        if label.is_empty() {
            return Err(Id3Error::format(format!(
                "attribute '{name}' declares an empty value"
            )));
        }
        values.push(label.to_string());
    }
    Ok((name, values))
}
