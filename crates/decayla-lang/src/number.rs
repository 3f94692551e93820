//! Lenient number reading shared by all text parsers.

/// Read the longest decimal literal at the start of `text`.
///
/// Leading whitespace is skipped and anything after the literal is ignored,
/// so `"10 units"` reads as `10.0`. Accepts an optional sign, digits with an
/// optional fraction (`3.`, `.5`), an optional exponent and `Infinity`.
/// Returns `NaN` when no literal is present.
pub fn parse_leading_f64(text: &str) -> f64 {
    let text = text.trim_start();
    let len = literal_len(text);
    if len == 0 {
        return f64::NAN;
    }
    text[..len].parse().unwrap_or(f64::NAN)
}

fn literal_len(text: &str) -> usize {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let sign_len = text.len() - unsigned.len();

    if unsigned.starts_with("Infinity") {
        return sign_len + "Infinity".len();
    }

    let after_int = skip_digits(unsigned);
    let int_digits = unsigned.len() - after_int.len();

    let (after_frac, frac_digits) = match after_int.strip_prefix('.') {
        Some(frac) => {
            let rest = skip_digits(frac);
            (rest, frac.len() - rest.len())
        }
        None => (after_int, 0),
    };
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    let mut rest = after_frac;
    if let Some(exp) = after_frac.strip_prefix(['e', 'E']) {
        let exp_unsigned = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        let exp_rest = skip_digits(exp_unsigned);
        if exp_rest.len() < exp_unsigned.len() {
            rest = exp_rest;
        }
    }

    text.len() - rest.len()
}

fn skip_digits(text: &str) -> &str {
    text.trim_start_matches(|c: char| c.is_ascii_digit())
}
