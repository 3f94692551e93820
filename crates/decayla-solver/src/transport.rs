use crate::solution::Allocation;

/// Remaining supply or demand below this is considered exhausted
const EXHAUSTED_EPS: f64 = 1e-9;

/// Maximum supply/demand gap still considered balanced
pub const BALANCE_TOLERANCE: f64 = 1e-6;

/// A transportation problem: sources with supply, destinations with demand,
/// and a unit cost per (source, destination).
///
/// The shape of `costs` is not checked against `supply` and `demand`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransportProblem {
    pub supply: Vec<f64>,
    pub demand: Vec<f64>,
    pub costs: Vec<Vec<f64>>,
}

impl TransportProblem {
    pub fn new(supply: Vec<f64>, demand: Vec<f64>, costs: Vec<Vec<f64>>) -> Self {
        Self { supply, demand, costs }
    }

    pub fn total_supply(&self) -> f64 {
        self.supply.iter().sum()
    }

    pub fn total_demand(&self) -> f64 {
        self.demand.iter().sum()
    }

    pub fn is_balanced(&self) -> bool {
        is_balanced(&self.supply, &self.demand)
    }

    pub fn solve(&self) -> Allocation {
        nw_corner(&self.supply, &self.demand, &self.costs)
    }
}

/// Whether total supply matches total demand within [`BALANCE_TOLERANCE`]
pub fn is_balanced(supply: &[f64], demand: &[f64]) -> bool {
    let gap = supply.iter().sum::<f64>() - demand.iter().sum::<f64>();
    gap.abs() <= BALANCE_TOLERANCE
}

/// Northwest-corner starting solution.
///
/// Starting at cell `(0, 0)`, each step ships as much as the current source
/// and destination allow, then moves down past an exhausted source and/or
/// right past an exhausted destination. The plan is feasible but not
/// necessarily cheapest. No balancing is done: with unequal totals the walk
/// simply stops when either side runs out.
pub fn nw_corner(supply: &[f64], demand: &[f64], costs: &[Vec<f64>]) -> Allocation {
    let (m, n) = (supply.len(), demand.len());
    let mut quantities = vec![vec![0.0; n]; m];
    let mut remaining_supply = supply.to_vec();
    let mut remaining_demand = demand.to_vec();

    let (mut i, mut j) = (0, 0);
    while i < m && j < n {
        let q = remaining_supply[i].min(remaining_demand[j]);
        quantities[i][j] = q;
        remaining_supply[i] -= q;
        remaining_demand[j] -= q;

        let source_done = remaining_supply[i].abs() < EXHAUSTED_EPS;
        let destination_done = remaining_demand[j].abs() < EXHAUSTED_EPS;
        // Infinite quantities leave NaN behind; step diagonally to terminate.
        if source_done || !destination_done {
            i += 1;
        }
        if destination_done || !source_done {
            j += 1;
        }
    }

    let total_cost = total_cost(&quantities, costs);
    log::debug!("nw corner over {m}x{n} cells, total cost {total_cost}");

    Allocation { quantities, total_cost }
}

/// Σ quantity × unit cost over cells with a positive quantity and a cost entry.
/// Cells whose cost row or column is missing are skipped.
pub fn total_cost(quantities: &[Vec<f64>], costs: &[Vec<f64>]) -> f64 {
    let mut total = 0.0;
    for (i, row) in quantities.iter().enumerate() {
        for (j, &q) in row.iter().enumerate() {
            if q <= 0.0 {
                continue;
            }
            if let Some(cost) = costs.get(i).and_then(|r| r.get(j)) {
                total += q * cost;
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_northwest_corner() {
        let allocation = nw_corner(&[10.0, 10.0], &[10.0, 10.0], &[vec![1.0, 2.0], vec![3.0, 4.0]]);

        assert_eq!(allocation.quantities, vec![vec![10.0, 0.0], vec![0.0, 10.0]]);
        assert!((allocation.total_cost - 50.0).abs() < 1e-9, "cost = {}", allocation.total_cost);
    }

    #[test]
    fn test_textbook_staircase() {
        // Supply 20, 30, 25 / demand 10, 25, 40
        let supply = [20.0, 30.0, 25.0];
        let demand = [10.0, 25.0, 40.0];
        let costs = vec![vec![2.0, 3.0, 1.0], vec![5.0, 4.0, 8.0], vec![5.0, 6.0, 8.0]];
        let allocation = nw_corner(&supply, &demand, &costs);

        assert_eq!(
            allocation.quantities,
            vec![
                vec![10.0, 10.0, 0.0],
                vec![0.0, 15.0, 15.0],
                vec![0.0, 0.0, 25.0],
            ]
        );
        // 10*2 + 10*3 + 15*4 + 15*8 + 25*8
        assert!((allocation.total_cost - 430.0).abs() < 1e-9, "cost = {}", allocation.total_cost);
    }

    #[test]
    fn test_allocation_respects_supply_and_demand() {
        let supply = [7.5, 12.25, 5.0];
        let demand = [4.0, 9.75, 11.0];
        let allocation = nw_corner(&supply, &demand, &[]);

        for (i, row) in allocation.quantities.iter().enumerate() {
            let shipped: f64 = row.iter().sum();
            assert!((shipped - supply[i]).abs() < 1e-9, "row {i} ships {shipped}");
        }
        for (j, &d) in demand.iter().enumerate() {
            let received: f64 = allocation.quantities.iter().map(|r| r[j]).sum();
            assert!((received - d).abs() < 1e-9, "column {j} receives {received}");
        }
    }

    #[test]
    fn test_total_cost_matches_manual_sum() {
        let supply = [15.0, 25.0, 10.0];
        let demand = [5.0, 15.0, 15.0, 15.0];
        let costs = vec![
            vec![10.0, 2.0, 20.0, 11.0],
            vec![12.0, 7.0, 9.0, 20.0],
            vec![4.0, 14.0, 16.0, 18.0],
        ];
        let allocation = nw_corner(&supply, &demand, &costs);

        let mut manual = 0.0;
        for (i, row) in allocation.quantities.iter().enumerate() {
            for (j, q) in row.iter().enumerate() {
                manual += q * costs[i][j];
            }
        }
        assert!((allocation.total_cost - manual).abs() < 1e-9);
    }

    #[test]
    fn test_missing_costs_are_skipped() {
        let allocation = nw_corner(&[5.0, 5.0], &[5.0, 5.0], &[vec![2.0]]);

        assert_eq!(allocation.quantities, vec![vec![5.0, 0.0], vec![0.0, 5.0]]);
        assert!((allocation.total_cost - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_nan_cost_propagates() {
        let allocation = nw_corner(&[5.0], &[5.0], &[vec![f64::NAN]]);
        assert!(allocation.total_cost.is_nan());
    }

    #[test]
    fn test_unbalanced_stops_when_demand_runs_out() {
        let supply = [10.0, 10.0];
        let demand = [5.0];
        let allocation = nw_corner(&supply, &demand, &[vec![1.0], vec![1.0]]);

        assert_eq!(allocation.quantities, vec![vec![5.0], vec![0.0]]);
        assert!(!is_balanced(&supply, &demand));
    }

    #[test]
    fn test_infinite_quantities_terminate() {
        let allocation = nw_corner(&[f64::INFINITY, 1.0], &[f64::INFINITY, 1.0], &[]);
        assert_eq!(allocation.quantities.len(), 2);
        assert_eq!(allocation.quantities[1][1], 1.0);
    }

    #[test]
    fn test_empty_inputs() {
        let allocation = nw_corner(&[], &[3.0], &[]);
        assert!(allocation.quantities.is_empty());
        assert_eq!(allocation.total_cost, 0.0);
    }

    #[test]
    fn test_problem_balance() {
        let problem = TransportProblem::new(vec![10.0, 20.0], vec![15.0, 15.0], vec![]);
        assert!(problem.is_balanced());
        assert_eq!(problem.total_supply(), 30.0);

        let problem = TransportProblem::new(vec![10.0], vec![10.5], vec![]);
        assert!(!problem.is_balanced());
    }
}
