use crate::grid::GridOptions;
use crate::problem::{Constraint, INEQUALITY_TOLERANCE, Objective, is_feasible};
use crate::solution::{VertexPoint, VertexSolution};

/// Lines whose determinant is this small relative to the product of their
/// normal lengths are treated as parallel
const PARALLEL_EPS: f64 = 1e-12;

/// A boundary line `a1*x1 + a2*x2 = b`
#[derive(Debug, Clone, Copy)]
struct Line {
    a1: f64,
    a2: f64,
    b: f64,
}

impl Line {
    fn intersect(&self, other: &Line) -> Option<(f64, f64)> {
        let det = self.a1 * other.a2 - self.a2 * other.a1;
        let scale = self.a1.hypot(self.a2) * other.a1.hypot(other.a2);
        if det.abs() <= PARALLEL_EPS * scale {
            return None;
        }
        let x1 = (self.b * other.a2 - self.a2 * other.b) / det;
        let x2 = (self.a1 * other.b - self.b * other.a1) / det;
        Some((x1, x2))
    }
}

/// Exact optimum of the two-variable LP restricted to `[0, max_range]²`.
///
/// The feasible region is a convex polygon cut out of the search box, so the
/// optimum sits on one of its corners. Every pairwise intersection of the
/// constraint lines and the four box edges is tested for feasibility using
/// the same tolerances as the grid search. `options.step` is ignored.
pub fn solve_vertices(objective: &Objective, constraints: &[Constraint], options: &GridOptions) -> VertexSolution {
    let range = f64::from(options.max_range);

    let mut lines = vec![
        Line { a1: 1.0, a2: 0.0, b: 0.0 },
        Line { a1: 0.0, a2: 1.0, b: 0.0 },
        Line { a1: 1.0, a2: 0.0, b: range },
        Line { a1: 0.0, a2: 1.0, b: range },
    ];
    lines.extend(
        constraints
            .iter()
            .filter(|c| c.a.c1.is_finite() && c.a.c2.is_finite() && c.b.is_finite())
            .filter(|c| c.a.c1 != 0.0 || c.a.c2 != 0.0)
            .map(|c| Line {
                a1: c.a.c1,
                a2: c.a.c2,
                b: c.b,
            }),
    );

    let in_box = |v: f64| v >= -INEQUALITY_TOLERANCE && v <= range + INEQUALITY_TOLERANCE;

    let mut vertices: Vec<VertexPoint> = Vec::new();
    let mut best: Option<VertexPoint> = None;

    for (i, first) in lines.iter().enumerate() {
        for second in &lines[i + 1..] {
            let Some((x1, x2)) = first.intersect(second) else {
                continue;
            };
            if !in_box(x1) || !in_box(x2) || !is_feasible(constraints, x1, x2) {
                continue;
            }
            if vertices
                .iter()
                .any(|v| (v.x1 - x1).abs() < INEQUALITY_TOLERANCE && (v.x2 - x2).abs() < INEQUALITY_TOLERANCE)
            {
                continue;
            }

            let vertex = VertexPoint {
                x1,
                x2,
                z: objective.eval(x1, x2),
            };
            vertices.push(vertex);

            match best {
                Some(b) if !objective.sense.improves(vertex.z, b.z) => {}
                _ => best = Some(vertex),
            }
        }
    }

    log::debug!("vertex enumeration over {} lines: {} feasible corners", lines.len(), vertices.len());

    VertexSolution { best, vertices }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::solve_grid;

    fn small() -> GridOptions {
        GridOptions::new().with_max_range(10)
    }

    #[test]
    fn test_simple_maximization() {
        let objective = Objective::maximize(3.0, 2.0);
        let constraints = vec![Constraint::at_most(1.0, 1.0, 4.0), Constraint::at_most(1.0, 0.0, 3.0)];
        let solution = solve_vertices(&objective, &constraints, &small());

        let best = solution.best.expect("feasible");
        assert!((best.x1 - 3.0).abs() < 1e-6, "x1 = {} (expected 3)", best.x1);
        assert!((best.x2 - 1.0).abs() < 1e-6, "x2 = {} (expected 1)", best.x2);
        assert!((best.z - 11.0).abs() < 1e-6, "z = {} (expected 11)", best.z);
    }

    #[test]
    fn test_finds_fractional_optimum_missed_by_grid() {
        // Maximize x1 + x2 subject to 2x1 + 2x2 <= 5: the optimum 2.5 is off the lattice
        let objective = Objective::maximize(1.0, 1.0);
        let constraints = vec![Constraint::at_most(2.0, 2.0, 5.0)];

        let grid = solve_grid(&objective, &constraints, &small()).best.expect("feasible");
        let exact = solve_vertices(&objective, &constraints, &small()).best.expect("feasible");

        assert!((grid.z - 2.0).abs() < 1e-9);
        assert!((exact.z - 2.5).abs() < 1e-6, "z = {} (expected 2.5)", exact.z);
        assert!(exact.x1.abs() < 1e-9, "first corner on the tie wins");
    }

    /// Solves a maximization both ways and checks the corner is at least as good
    fn assert_not_worse_than_grid(objective: &Objective, constraints: &[Constraint]) -> VertexPoint {
        let grid = solve_grid(objective, constraints, &small()).best.expect("grid feasible");
        let exact = solve_vertices(objective, constraints, &small()).best.expect("vertex feasible");
        assert!(
            exact.z >= grid.z - 1e-9,
            "grid z = {} beats vertex z = {}",
            grid.z,
            exact.z
        );
        exact
    }

    #[test]
    fn test_small_coefficients_keep_their_corner() {
        // x1 + x2 <= 10 and x1 <= x2, both scaled by 1e-7; the optimum is (5, 5)
        let objective = Objective::maximize(1.0, 0.0);
        let constraints = vec![Constraint::at_most(1e-7, 1e-7, 1e-6), Constraint::at_most(1e-7, -1e-7, 0.0)];
        let best = assert_not_worse_than_grid(&objective, &constraints);

        assert!((best.x1 - 5.0).abs() < 1e-6, "x1 = {} (expected 5)", best.x1);
        assert!((best.x2 - 5.0).abs() < 1e-6, "x2 = {} (expected 5)", best.x2);
    }

    #[test]
    fn test_near_parallel_lines_intersect() {
        // x1 + x2 <= 10 and x1 + 1.01x2 >= 10.04 meet at (6, 4)
        let objective = Objective::maximize(1.0, 0.0);
        let constraints = vec![Constraint::at_most(1.0, 1.0, 10.0), Constraint::at_least(1.0, 1.01, 10.04)];
        let best = assert_not_worse_than_grid(&objective, &constraints);

        assert!((best.x1 - 6.0).abs() < 1e-6, "x1 = {} (expected 6)", best.x1);
        assert!((best.x2 - 4.0).abs() < 1e-6, "x2 = {} (expected 4)", best.x2);
    }

    #[test]
    fn test_parallel_lines_are_skipped() {
        let first = Line { a1: 2e-7, a2: 4e-7, b: 1.0 };
        let second = Line { a1: 1e-7, a2: 2e-7, b: 3.0 };
        assert!(first.intersect(&second).is_none());
        assert!(first.intersect(&Line { a1: 1.0, a2: 0.0, b: 0.0 }).is_some());
    }

    #[test]
    fn test_unconstrained_uses_box_corners() {
        let objective = Objective::minimize(1.0, -1.0);
        let solution = solve_vertices(&objective, &[], &small());

        assert_eq!(solution.vertices.len(), 4);
        let best = solution.best.expect("feasible");
        assert_eq!((best.x1, best.x2), (0.0, 10.0));
    }

    #[test]
    fn test_equality_constraint() {
        let objective = Objective::maximize(1.0, 0.0);
        let constraints = vec![Constraint::exactly(1.0, 1.0, 6.0), Constraint::at_most(1.0, 0.0, 4.5)];
        let best = solve_vertices(&objective, &constraints, &small()).best.expect("feasible");

        assert!((best.x1 - 4.5).abs() < 1e-6);
        assert!((best.x2 - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_infeasible_within_range() {
        let objective = Objective::maximize(1.0, 1.0);
        let constraints = vec![Constraint::at_least(1.0, 0.0, 1000.0)];
        let solution = solve_vertices(&objective, &constraints, &small());

        assert!(solution.best.is_none());
        assert!(solution.vertices.is_empty());
    }
}
