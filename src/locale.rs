use std::sync::OnceLock;

use regex::Regex;

fn leading_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)").unwrap())
}

/// Parses a Turkish-formatted price string ("." grouping, "," decimal).
/// Empty or unparseable input yields 0.0, which callers treat as "no price".
pub fn parse_locale_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    // Drop grouping dots, then promote the decimal comma. Trailing junk
    // ("42,5 TL") is tolerated the same way parseFloat tolerates it.
    let normalized = trimmed.replace('.', "").replace(',', ".");

    match leading_number().find(&normalized) {
        Some(m) => m.as_str().parse::<f64>().unwrap_or(0.0),
        None => 0.0,
    }
}

/// Formats a number with "." thousands grouping and "," decimal separator,
/// trimming trailing zeros down to at most `max_fraction_digits` digits.
/// Zero and non-finite values format as "0".
pub fn format_locale_number(value: f64, max_fraction_digits: usize) -> String {
    format_grouped(value, 0, max_fraction_digits)
}

/// Display formatting for alarm texts: at least 2, at most 4 fraction digits.
pub fn format_price(value: f64) -> String {
    format_grouped(value, 2, 4)
}

fn format_grouped(value: f64, min_fraction_digits: usize, max_fraction_digits: usize) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }

    let rounded = format!("{:.*}", max_fraction_digits, value);
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (rounded, String::new()),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let mut frac = frac_part.trim_end_matches('0').to_string();
    while frac.len() < min_fraction_digits {
        frac.push('0');
    }

    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{frac}")
    }
}
