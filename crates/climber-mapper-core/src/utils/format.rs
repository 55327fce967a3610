use serde_json::Value;

/// Placeholder printed for absent values
pub const MISSING: &str = "NaN";

/// Format an optional string, returning a default if None
pub fn format_optional(value: Option<&str>, default: &str) -> String {
    value.unwrap_or(default).to_string()
}

/// Format a raw `[a, b]` JSON pair as `(b, a)`.
///
/// Numbers print as written in the source (`40` stays `40`). A missing or
/// non-numeric element prints as `NaN`; a value that isn't an array at all
/// prints as a single `NaN`.
pub fn format_pair(pair: Option<&Value>) -> String {
    let Some(items) = pair.and_then(Value::as_array) else {
        return MISSING.to_string();
    };
    let element = |index: usize| match items.get(index) {
        Some(Value::Number(n)) => n.to_string(),
        _ => MISSING.to_string(),
    };
    format!("({}, {})", element(1), element(0))
}

/// Right-align `s` to `width` characters
pub fn pad_left(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - len), s)
    }
}
