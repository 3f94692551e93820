mod grid;
mod problem;
mod solution;
mod transport;
mod vertex;

pub use grid::{GridOptions, solve_grid};
pub use problem::{
    Constraint, ConstraintOp, EQUALITY_TOLERANCE, INEQUALITY_TOLERANCE, LinearExpr, Objective, Sense, is_feasible,
};
pub use solution::{Allocation, GridSolution, Point, VertexPoint, VertexSolution};
pub use transport::{BALANCE_TOLERANCE, TransportProblem, is_balanced, nw_corner, total_cost};
pub use vertex::solve_vertices;
