use decayla_solver::LinearExpr;

use crate::number::parse_leading_f64;

/// Coefficient of `variable` in a free-text linear expression.
///
/// Finds the first place where an optional sign and an optional decimal
/// number (whitespace allowed between them) are followed by `variable`,
/// compared case-insensitively. A bare or signed variable has coefficient
/// `1` or `-1`. An absent variable has coefficient `0`. Names are not
/// checked for word boundaries, so `x12` also counts as `x1`.
pub fn extract_coefficient(expression: &str, variable: &str) -> f64 {
    match find_coefficient(expression, variable) {
        Some(raw) => coefficient_value(raw),
        None => 0.0,
    }
}

/// Coefficients of `x1` and `x2`; any other terms are ignored
pub fn parse_linear_expr(expression: &str) -> LinearExpr {
    LinearExpr::new(
        extract_coefficient(expression, "x1"),
        extract_coefficient(expression, "x2"),
    )
}

fn find_coefficient<'a>(expression: &'a str, variable: &str) -> Option<&'a str> {
    for (start, _) in expression.char_indices() {
        let rest = &expression[start..];
        let longest = coefficient_len(rest);
        // Any prefix of the longest coefficient is itself a valid coefficient.
        for len in (0..=longest).rev() {
            if rest.is_char_boundary(len) && variable_follows(&rest[len..], variable) {
                return Some(&rest[..len]);
            }
        }
    }
    None
}

/// Length of `[+-]? \s* digits . digits` at the start of `text`, every part optional
fn coefficient_len(text: &str) -> usize {
    let mut rest = text.strip_prefix(['+', '-']).unwrap_or(text);
    rest = rest.trim_start();
    rest = rest.trim_start_matches(|c: char| c.is_ascii_digit());
    rest = rest.strip_prefix('.').unwrap_or(rest);
    rest = rest.trim_start_matches(|c: char| c.is_ascii_digit());
    text.len() - rest.len()
}

fn variable_follows(text: &str, variable: &str) -> bool {
    text.trim_start()
        .get(..variable.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(variable))
}

fn coefficient_value(raw: &str) -> f64 {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    match compact.as_str() {
        "" | "+" => 1.0,
        "-" => -1.0,
        number => parse_leading_f64(number),
    }
}
