//! Literal evaluation of command-line override values.
//!
//! A value is tried against an ordered list of parsers and the first one
//! that accepts it wins; text no parser accepts stays a plain string.

use super::types::{from_yaml, ConfigValue};

type LiteralParser = fn(&str) -> Option<ConfigValue>;

/// Parsers in precedence order.
const PARSERS: &[LiteralParser] = &[
    parse_integer,
    parse_float,
    parse_bool,
    parse_null,
    parse_quoted,
    parse_structural,
];

/// Evaluate an override value.
///
/// # Examples
///
/// ```
/// use dicfg::value::parse_literal;
/// use serde_json::json;
///
/// assert_eq!(parse_literal("5"), json!(5));
/// assert_eq!(parse_literal("[1, 2]"), json!([1, 2]));
/// assert_eq!(parse_literal("hello"), json!("hello"));
/// ```
pub fn parse_literal(text: &str) -> ConfigValue {
    let trimmed = text.trim();
    PARSERS
        .iter()
        .find_map(|parse| parse(trimmed))
        .unwrap_or_else(|| ConfigValue::String(text.to_string()))
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

/// Digits with optional single underscores between them.
fn is_digit_run(text: &str, radix: u32) -> bool {
    !text.is_empty()
        && !text.starts_with('_')
        && !text.ends_with('_')
        && !text.contains("__")
        && text.chars().all(|c| c == '_' || c.is_digit(radix))
}

fn parse_integer(text: &str) -> Option<ConfigValue> {
    let (negative, body) = split_sign(text);

    let (digits, radix) = match body.get(..2) {
        Some("0x") | Some("0X") => (&body[2..], 16),
        Some("0o") | Some("0O") => (&body[2..], 8),
        Some("0b") | Some("0B") => (&body[2..], 2),
        _ => (body, 10),
    };

    if !is_digit_run(digits, radix) {
        return None;
    }
    // Leading zeros are not an integer literal ("007" stays a string).
    if radix == 10
        && digits.len() > 1
        && digits.starts_with('0')
        && !digits.trim_matches('0').is_empty()
    {
        return None;
    }

    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    let magnitude = u64::from_str_radix(&cleaned, radix).ok()?;

    if negative {
        if magnitude <= i64::MAX as u64 + 1 {
            let value = -(magnitude as i128) as i64;
            return Some(ConfigValue::Number(value.into()));
        }
        return None;
    }

    if let Ok(value) = i64::try_from(magnitude) {
        Some(ConfigValue::Number(value.into()))
    } else {
        Some(ConfigValue::Number(magnitude.into()))
    }
}

/// Decimal or exponent floats. Values that overflow `f64` are rejected, so
/// `1e999` stays a string like the `inf` word does.
fn parse_float(text: &str) -> Option<ConfigValue> {
    let (_, body) = split_sign(text);

    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(idx) => (&body[..idx], Some(&body[idx + 1..])),
        None => (body, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (mantissa, None),
    };

    let int_ok = int_part.is_empty() || is_digit_run(int_part, 10);
    let frac_ok = frac_part.map_or(true, |f| f.is_empty() || is_digit_run(f, 10));
    let has_digits = !int_part.is_empty() || frac_part.map_or(false, |f| !f.is_empty());
    if !int_ok || !frac_ok || !has_digits {
        return None;
    }
    if frac_part.is_none() && exponent.is_none() {
        return None;
    }
    if let Some(exp) = exponent {
        let (_, exp_digits) = split_sign(exp);
        if !is_digit_run(exp_digits, 10) {
            return None;
        }
    }

    let cleaned: String = text.chars().filter(|&c| c != '_').collect();
    let value: f64 = cleaned.parse().ok()?;
    serde_json::Number::from_f64(value).map(ConfigValue::Number)
}

fn parse_bool(text: &str) -> Option<ConfigValue> {
    match text {
        "True" | "true" => Some(ConfigValue::Bool(true)),
        "False" | "false" => Some(ConfigValue::Bool(false)),
        _ => None,
    }
}

fn parse_null(text: &str) -> Option<ConfigValue> {
    match text {
        "None" | "null" => Some(ConfigValue::Null),
        _ => None,
    }
}

fn parse_quoted(text: &str) -> Option<ConfigValue> {
    let quote = text.chars().next().filter(|&c| c == '\'' || c == '"')?;
    if text.len() < 2 || !text.ends_with(quote) {
        return None;
    }
    let inner = &text[1..text.len() - 1];
    if inner.contains(quote) {
        return None;
    }
    Some(ConfigValue::String(inner.to_string()))
}

/// Rewrite bare `None` words outside quotes to YAML `null`.
fn replace_bare_none(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut quote: Option<char> = None;
    let mut word = String::new();

    let flush = |word: &mut String, out: &mut String| {
        if word.as_str() == "None" {
            out.push_str("null");
        } else {
            out.push_str(word);
        }
        word.clear();
    };

    for c in source.chars() {
        if let Some(q) = quote {
            out.push(c);
            if c == q {
                quote = None;
            }
        } else if c.is_alphanumeric() || c == '_' {
            word.push(c);
        } else {
            flush(&mut word, &mut out);
            if c == '\'' || c == '"' {
                quote = Some(c);
            }
            out.push(c);
        }
    }
    flush(&mut word, &mut out);
    out
}

fn parse_structural(text: &str) -> Option<ConfigValue> {
    let source = match (text.chars().next()?, text.chars().last()?) {
        ('[', ']') | ('{', '}') => replace_bare_none(text),
        ('(', ')') => format!("[{}]", replace_bare_none(&text[1..text.len() - 1])),
        _ => return None,
    };

    let parsed: serde_yaml::Value = serde_yaml::from_str(&source).ok()?;
    match parsed {
        serde_yaml::Value::Sequence(_) | serde_yaml::Value::Mapping(_) => Some(from_yaml(parsed)),
        _ => None,
    }
}
