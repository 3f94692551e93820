use std::iter::StepBy;
use std::ops::RangeInclusive;

use crate::problem::{Constraint, Objective, is_feasible};
use crate::solution::{GridSolution, Point};

/// Bounds of the search lattice shared by the grid and vertex solvers
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    /// Upper bound (inclusive) of both `x1` and `x2`
    pub max_range: u32,
    /// Lattice increment
    pub step: u32,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            max_range: 100,
            step: 1,
        }
    }
}

impl GridOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_range(mut self, max_range: u32) -> Self {
        self.max_range = max_range;
        self
    }

    /// A step of zero is treated as one.
    pub fn with_step(mut self, step: u32) -> Self {
        self.step = step.max(1);
        self
    }

    /// Lattice coordinates along one axis: `0, step, 2*step, ..` up to `max_range`
    pub fn axis(&self) -> StepBy<RangeInclusive<u32>> {
        (0..=self.max_range).step_by(self.step.max(1) as usize)
    }

    /// Number of lattice points visited by a full search
    pub fn lattice_size(&self) -> u64 {
        let per_axis = u64::from(self.max_range / self.step.max(1)) + 1;
        per_axis * per_axis
    }
}

/// Brute-force search of `[0, max_range]²` on the integer lattice.
///
/// Points are visited with `x1` in the outer loop and `x2` in the inner loop.
/// The first feasible point becomes the incumbent and is only replaced by a
/// strictly better one, so ties resolve to the lowest `x1`, then lowest `x2`.
/// Optima that lie off the lattice or outside the range are missed.
pub fn solve_grid(objective: &Objective, constraints: &[Constraint], options: &GridOptions) -> GridSolution {
    let mut results = Vec::new();
    let mut best: Option<Point> = None;

    for x1 in options.axis() {
        for x2 in options.axis() {
            let (fx1, fx2) = (f64::from(x1), f64::from(x2));
            if !is_feasible(constraints, fx1, fx2) {
                continue;
            }

            let point = Point {
                x1,
                x2,
                z: objective.eval(fx1, fx2),
            };
            results.push(point);

            match best {
                Some(b) if !objective.sense.improves(point.z, b.z) => {}
                _ => best = Some(point),
            }
        }
    }

    log::debug!(
        "grid search over {} points: {} feasible, best {:?}",
        options.lattice_size(),
        results.len(),
        best
    );

    GridSolution { best, results }
}
