/// A feasible lattice point and its objective value
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x1: u32,
    pub x2: u32,
    /// Objective value at `(x1, x2)`
    pub z: f64,
}

/// The result of a grid search
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridSolution {
    /// Best feasible point found, if any
    pub best: Option<Point>,
    /// Every feasible point, in enumeration order (x1 outer, x2 inner)
    pub results: Vec<Point>,
}

/// A feasible corner of the searched region
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexPoint {
    pub x1: f64,
    pub x2: f64,
    pub z: f64,
}

/// The result of corner-point enumeration
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VertexSolution {
    /// Best feasible vertex, if the region is non-empty
    pub best: Option<VertexPoint>,
    /// Distinct feasible vertices, in discovery order
    pub vertices: Vec<VertexPoint>,
}

/// A transportation plan produced by the northwest-corner walk
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    /// Shipped quantity per (source, destination), `supply.len() x demand.len()`
    pub quantities: Vec<Vec<f64>>,
    /// Sum of quantity times unit cost over allocated cells with a known cost
    pub total_cost: f64,
}
