//! CLI output formatting.
//!
//! JSON documents are printed with syntax highlighting; listings use tables.

use colored::Colorize;
use serde::Serialize;

use crate::error::GitinbitError;

/// Serializes `value` and prints it with syntax highlighting.
///
/// # Errors
///
/// Returns an error if `value` cannot be serialized.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), GitinbitError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", highlight_json(&json));
    Ok(())
}

/// Colors a pretty-printed JSON document.
///
/// Keys are cyan, strings green, numbers yellow, booleans and null magenta.
#[must_use]
pub fn highlight_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut token = String::new();
    let mut in_string = false;
    let mut escape_next = false;
    let mut is_key = false;
    let mut after_colon = false;

    for ch in json.chars() {
        if escape_next {
            token.push(ch);
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => {
                token.push(ch);
                escape_next = true;
            }
            '"' if in_string => {
                token.push(ch);
                let colored = if is_key { token.cyan() } else { token.green() };
                out.push_str(&colored.to_string());
                token.clear();
                in_string = false;
            }
            '"' => {
                flush_token(&mut out, &mut token, after_colon);
                token.push(ch);
                in_string = true;
                is_key = !after_colon;
                after_colon = false;
            }
            ':' if !in_string => {
                flush_token(&mut out, &mut token, false);
                out.push(':');
                after_colon = true;
            }
            ',' | '{' | '}' | '[' | ']' if !in_string => {
                flush_token(&mut out, &mut token, after_colon);
                out.push_str(&ch.to_string().bold().to_string());
                after_colon = false;
            }
            _ => token.push(ch),
        }
    }

    flush_token(&mut out, &mut token, after_colon);
    out
}

fn flush_token(out: &mut String, token: &mut String, is_value: bool) {
    let value = token.trim();
    if is_value && !value.is_empty() {
        let start = token.find(value).unwrap_or(0);
        let (prefix, rest) = token.split_at(start);
        let suffix = &rest[value.len()..];

        let colored = if matches!(value, "true" | "false" | "null") {
            value.magenta().to_string()
        } else if value.parse::<f64>().is_ok() {
            value.yellow().to_string()
        } else {
            value.to_string()
        };
        out.push_str(prefix);
        out.push_str(&colored);
        out.push_str(suffix);
    } else {
        out.push_str(token);
    }
    token.clear();
}

/// Truncates to `max_chars` characters, ending in an ellipsis when shortened.
#[must_use]
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars <= 1 {
        return "…".to_string();
    }

    let cut = s.char_indices().nth(max_chars - 1).map_or(s.len(), |(idx, _)| idx);
    format!("{}…", &s[..cut])
}

/// Formats a boolean as a check or cross mark.
#[must_use]
pub fn format_bool(value: bool) -> String {
    if value { "✓".green().to_string() } else { "✗".red().to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(json: &str) -> String {
        colored::control::set_override(false);
        highlight_json(json)
    }

    #[test]
    fn test_highlight_preserves_text() {
        let json = "{\n  \"a\": \"x: \\\"y\\\"\",\n  \"b\": [1.5, true, null]\n}";
        assert_eq!(plain(json), json);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello w…");
        assert_eq!(truncate("hello", 1), "…");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("héllo wörld", 7), "héllo …");
    }

    #[test]
    fn test_format_bool() {
        assert!(format_bool(true).contains('✓'));
        assert!(format_bool(false).contains('✗'));
    }
}
