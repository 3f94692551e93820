use decayla_solver::{Constraint, ConstraintOp, Objective, Sense};

use crate::expr::parse_linear_expr;
use crate::number::parse_leading_f64;

/// Parse an objective such as `max 2x1 + 3x2`.
///
/// The trimmed text must start with `max` or `min` (any case), followed by
/// whitespace and an expression on the same line. Returns `None` when the
/// text does not have that shape.
pub fn parse_objective(text: &str) -> Option<Objective> {
    let text = text.trim();
    let keyword = text.get(..3)?;
    let sense = if keyword.eq_ignore_ascii_case("max") {
        Sense::Max
    } else if keyword.eq_ignore_ascii_case("min") {
        Sense::Min
    } else {
        return None;
    };

    let rest = &text[3..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let expression = rest.trim_start().lines().next().filter(|e| !e.is_empty())?;

    Some(Objective::new(sense, parse_linear_expr(expression)))
}

/// Parse one constraint per line, e.g. `x1 + 2x2 <= 14`.
///
/// Blank lines and lines without a comparison operator are skipped.
pub fn parse_constraints(text: &str) -> Vec<Constraint> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let constraint = parse_constraint(line);
            if constraint.is_none() {
                log::debug!("skipping constraint line {line:?}");
            }
            constraint
        })
        .collect()
}

/// Split a line at its first `<=`, `>=` or `=`.
///
/// Both sides must be non-empty. The right-hand side is read leniently and
/// becomes `NaN` when it is not a number.
pub fn parse_constraint(line: &str) -> Option<Constraint> {
    let (index, op) = find_operator(line)?;
    let lhs = &line[..index];
    let rhs = &line[index + op.symbol().len()..];
    if lhs.is_empty() || rhs.is_empty() {
        return None;
    }
    Some(Constraint::new(parse_linear_expr(lhs), op, parse_leading_f64(rhs)))
}

fn find_operator(line: &str) -> Option<(usize, ConstraintOp)> {
    let bytes = line.as_bytes();
    (0..bytes.len()).find_map(|i| match (bytes[i], bytes.get(i + 1)) {
        (b'<', Some(b'=')) => Some((i, ConstraintOp::Le)),
        (b'>', Some(b'=')) => Some((i, ConstraintOp::Ge)),
        (b'=', _) => Some((i, ConstraintOp::Eq)),
        _ => None,
    })
}
