use decayla_solver::TransportProblem;

use crate::number::parse_leading_f64;

/// Parse a comma-separated list such as `20, 30, 25`.
///
/// Entries that are not numbers are dropped.
pub fn parse_number_list(text: &str) -> Vec<f64> {
    text.split(',')
        .map(|entry| parse_leading_f64(entry.trim()))
        .filter(|value| !value.is_nan())
        .collect()
}

/// Parse one comma-separated cost row per line.
///
/// Blank lines are skipped. Unlike [`parse_number_list`], cells that are not
/// numbers are kept as `NaN` so column positions stay aligned.
pub fn parse_cost_matrix(text: &str) -> Vec<Vec<f64>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.split(',').map(|cell| parse_leading_f64(cell.trim())).collect())
        .collect()
}

/// Build a [`TransportProblem`] from the three text fields
pub fn parse_transport_problem(supply: &str, demand: &str, costs: &str) -> TransportProblem {
    TransportProblem::new(
        parse_number_list(supply),
        parse_number_list(demand),
        parse_cost_matrix(costs),
    )
}
