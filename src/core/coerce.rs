//! Text-to-number coercion for form field values.
//!
//! Form inputs always arrive as text. These helpers read the longest numeric
//! prefix and fall back to not-a-number instead of rejecting the input, so a
//! half-typed or empty field still produces a payload.

/// Parse the leading decimal literal of `text` as a float.
///
/// Leading whitespace is skipped and trailing characters are ignored
/// (`"70kg"` gives `70.0`). `Infinity` with an optional sign is accepted.
/// Input without a leading number yields `f64::NAN`.
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i = 1;
    }

    if s[i..].starts_with("Infinity") {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = i;
    i = skip_digits(bytes, i);
    let mut mantissa_digits = i - int_start;

    if bytes.get(i) == Some(&b'.') {
        let frac_end = skip_digits(bytes, i + 1);
        let frac_digits = frac_end - (i + 1);
        if mantissa_digits + frac_digits > 0 {
            mantissa_digits += frac_digits;
            i = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exp_end = skip_digits(bytes, j);
        if exp_end > j {
            i = exp_end;
        }
    }

    s[..i].parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse the leading integer of `text`.
///
/// Accepts an optional sign and a `0x`/`0X` prefix for hexadecimal. Reading
/// stops at the first character that is not a digit, so `"30.5"` gives `30`.
/// Returns `None` when no digits are present or the value does not fit in
/// an `i64`.
pub fn parse_int(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = if rest.starts_with("0x") || rest.starts_with("0X") {
        (16, &rest[2..])
    } else {
        (10, rest)
    };

    let mut value: i64 = 0;
    let mut seen = 0usize;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else { break };
        value = value
            .checked_mul(i64::from(radix))?
            .checked_add(i64::from(d))?;
        seen += 1;
    }

    if seen == 0 {
        return None;
    }

    Some(if negative { -value } else { value })
}

#[inline]
fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}
