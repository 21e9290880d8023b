//! Value classification for raw cell text.
//!
//! Decides which kind of cell a piece of text describes before any cell is
//! built. The rules are a small hand-written grammar:
//!
//! - `""` is an empty cell
//! - `=...` is a formula if it passes the formula grammar
//! - `"..."` is text if every interior `"` and `\` is escaped
//! - everything else must be an optionally signed integer or decimal

/// The kind of value a piece of raw text describes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueKind {
    Invalid,
    Text,
    Integer,
    Decimal,
    Empty,
    Formula,
}

/// Arithmetic operators understood by formulas.
pub fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^')
}

/// Classify raw cell text.
pub fn classify(text: &str) -> ValueKind {
    if text.is_empty() {
        return ValueKind::Empty;
    }

    if text.starts_with('=') {
        return if is_formula(&normalize_formula(text)) {
            ValueKind::Formula
        } else {
            ValueKind::Invalid
        };
    }

    if text.starts_with('"') {
        return if is_quoted_text(text) {
            ValueKind::Text
        } else {
            ValueKind::Invalid
        };
    }

    classify_number(text)
}

/// Strip all whitespace and uppercase letters, the form formulas are stored in.
pub fn normalize_formula(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn is_quoted_text(text: &str) -> bool {
    if text.len() < 2 || !text.ends_with('"') {
        return false;
    }

    let mut interior = text[1..text.len() - 1].chars();
    while let Some(c) = interior.next() {
        match c {
            '"' => return false,
            '\\' => match interior.next() {
                Some('"') | Some('\\') => {}
                _ => return false,
            },
            _ => {}
        }
    }
    true
}

fn classify_number(text: &str) -> ValueKind {
    let digits = text
        .strip_prefix('+')
        .or_else(|| text.strip_prefix('-'))
        .unwrap_or(text);

    if digits.is_empty() || digits.starts_with('.') || !digits.ends_with(|c: char| c.is_ascii_digit())
    {
        return ValueKind::Invalid;
    }

    let mut had_point = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => {}
            '.' if !had_point => had_point = true,
            _ => return ValueKind::Invalid,
        }
    }

    if had_point {
        ValueKind::Decimal
    } else {
        ValueKind::Integer
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Last {
    Start,
    Operator,
    Number,
    Reference,
}

/// Check the formula grammar on normalized text (leading `=` included).
fn is_formula(formula: &str) -> bool {
    let Some(body) = formula.strip_prefix('=') else {
        return false;
    };
    if body.is_empty() {
        return false;
    }

    let chars: Vec<char> = body.chars().collect();
    let mut last = Last::Start;
    let mut operator_run = 0usize;
    // A run that opens the formula may hold a single unary sign only.
    let mut run_at_start = false;
    let mut number_has_point = false;
    let mut i = 0usize;

    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_uppercase() {
            if matches!(last, Last::Number | Last::Reference) {
                return false;
            }
            let start = i + 1;
            let mut end = start;
            while end < chars.len() && chars[end].is_ascii_digit() {
                end += 1;
            }
            // Row 0 does not exist.
            if end == start || chars[start..end].iter().all(|d| *d == '0') {
                return false;
            }
            last = Last::Reference;
            operator_run = 0;
            i = end;
            continue;
        }

        if is_operator(c) {
            let unary = c == '+' || c == '-';
            if operator_run == 0 {
                run_at_start = last == Last::Start;
            }
            let allowed = match operator_run {
                0 => !run_at_start || unary,
                1 => unary && !run_at_start,
                _ => false,
            };
            if !allowed {
                return false;
            }
            operator_run += 1;
            last = Last::Operator;
        } else if c.is_ascii_digit() {
            if last != Last::Number {
                number_has_point = false;
            }
            if last == Last::Reference {
                return false;
            }
            last = Last::Number;
            operator_run = 0;
        } else if c == '.' {
            if last != Last::Number || number_has_point || i + 1 == chars.len() {
                return false;
            }
            number_has_point = true;
        } else {
            return false;
        }
        i += 1;
    }

    last != Last::Operator
}
