use std::fmt;

use decayla_solver::{
    Allocation, Constraint, GridOptions, Objective, Point, TransportProblem, VertexPoint, solve_grid, solve_vertices,
};
use thiserror::Error;

use crate::problem::{parse_constraints, parse_objective};
use crate::transport::parse_transport_problem;

/// Search range used by solve requests unless overridden
pub const DEFAULT_MAX_RANGE: u32 = 50;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("objective not understood")]
    ObjectiveNotUnderstood,
    #[error("add at least one constraint")]
    NoConstraints,
    /// Nothing feasible was found in the searched box; the problem itself may
    /// still be feasible further out.
    #[error("no feasible solutions within range 0..{max_range}")]
    NoFeasiblePoint { max_range: u32 },
    #[error("please enter supply, demand and cost rows")]
    MissingTransportInput,
}

/// How an LP request is solved
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Brute-force integer lattice search (approximate)
    #[default]
    Grid,
    /// Corner-point enumeration (exact within the search box)
    Vertex,
}

/// Raw text of an LP form: an objective and one constraint per line
#[derive(Debug, Clone)]
pub struct LpRequest {
    pub objective: String,
    pub constraints: String,
    pub options: GridOptions,
    pub method: Method,
}

impl LpRequest {
    pub fn new(objective: impl Into<String>, constraints: impl Into<String>) -> Self {
        Self {
            objective: objective.into(),
            constraints: constraints.into(),
            options: GridOptions::new().with_max_range(DEFAULT_MAX_RANGE),
            method: Method::default(),
        }
    }

    pub fn with_options(mut self, options: GridOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Parse both fields, rejecting an unreadable objective or an empty constraint set
    pub fn parse(&self) -> Result<(Objective, Vec<Constraint>), RequestError> {
        let objective = parse_objective(&self.objective).ok_or(RequestError::ObjectiveNotUnderstood)?;
        let constraints = parse_constraints(&self.constraints);
        if constraints.is_empty() {
            return Err(RequestError::NoConstraints);
        }
        for (i, c) in constraints.iter().enumerate() {
            if c.b.is_nan() {
                log::warn!("constraint {} has a non-numeric right-hand side", i + 1);
            }
        }
        Ok((objective, constraints))
    }

    pub fn solve(&self) -> Result<LpReport, RequestError> {
        let (objective, constraints) = self.parse()?;
        let max_range = self.options.max_range;

        let (best, feasible) = match self.method {
            Method::Grid => {
                let solution = solve_grid(&objective, &constraints, &self.options);
                (
                    solution.best.map(Candidate::from),
                    solution.results.into_iter().map(Candidate::from).collect(),
                )
            }
            Method::Vertex => {
                let solution = solve_vertices(&objective, &constraints, &self.options);
                (
                    solution.best.map(Candidate::from),
                    solution.vertices.into_iter().map(Candidate::from).collect(),
                )
            }
        };

        let best = best.ok_or(RequestError::NoFeasiblePoint { max_range })?;
        Ok(LpReport {
            objective,
            constraints,
            method: self.method,
            max_range,
            best,
            feasible,
        })
    }
}

/// A feasible point reported back to the caller
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub x1: f64,
    pub x2: f64,
    pub z: f64,
}

impl From<Point> for Candidate {
    fn from(p: Point) -> Self {
        Self {
            x1: f64::from(p.x1),
            x2: f64::from(p.x2),
            z: p.z,
        }
    }
}

impl From<VertexPoint> for Candidate {
    fn from(p: VertexPoint) -> Self {
        Self {
            x1: p.x1,
            x2: p.x2,
            z: p.z,
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LpReport {
    pub objective: Objective,
    pub constraints: Vec<Constraint>,
    pub method: Method,
    pub max_range: u32,
    pub best: Candidate,
    /// Grid points or corners that passed every constraint
    pub feasible: Vec<Candidate>,
}

impl LpReport {
    /// Caveat shown with every result
    pub fn note(&self) -> String {
        match self.method {
            Method::Grid => format!(
                "Grid-search approximate: only integer points in 0..{} were tried, so the true optimum may be missed.",
                self.max_range
            ),
            Method::Vertex => format!(
                "Exact corner-point optimum within 0..{}; solutions outside this range were not considered.",
                self.max_range
            ),
        }
    }
}

impl fmt::Display for LpReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.method {
            Method::Grid => writeln!(f, "Approximate best solution:")?,
            Method::Vertex => writeln!(f, "Best corner solution:")?,
        }
        writeln!(f, "  x1 = {}", self.best.x1)?;
        writeln!(f, "  x2 = {}", self.best.x2)?;
        writeln!(f, "  Z  = {}", self.best.z)?;
        write!(f, "Note: {}", self.note())
    }
}

/// Raw text of a transportation form
#[derive(Debug, Clone, Default)]
pub struct TransportRequest {
    /// Comma-separated supplies
    pub supply: String,
    /// Comma-separated demands
    pub demand: String,
    /// One comma-separated cost row per line
    pub costs: String,
}

impl TransportRequest {
    pub fn new(supply: impl Into<String>, demand: impl Into<String>, costs: impl Into<String>) -> Self {
        Self {
            supply: supply.into(),
            demand: demand.into(),
            costs: costs.into(),
        }
    }

    pub fn parse(&self) -> Result<TransportProblem, RequestError> {
        let problem = parse_transport_problem(&self.supply, &self.demand, &self.costs);
        if problem.supply.is_empty() || problem.demand.is_empty() || problem.costs.is_empty() {
            return Err(RequestError::MissingTransportInput);
        }
        if problem.costs.iter().flatten().any(|c| c.is_nan()) {
            log::warn!("cost table contains non-numeric cells; the total cost will be NaN if they are used");
        }
        Ok(problem)
    }

    /// Run the northwest-corner method. Unequal totals are reported, not corrected.
    pub fn solve(&self) -> Result<TransportReport, RequestError> {
        let problem = self.parse()?;
        let imbalance = (!problem.is_balanced()).then(|| Imbalance {
            supply_total: problem.total_supply(),
            demand_total: problem.total_demand(),
        });
        let allocation = problem.solve();
        Ok(TransportReport {
            problem,
            allocation,
            imbalance,
        })
    }
}

/// Totals of an unbalanced transportation problem
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Imbalance {
    pub supply_total: f64,
    pub demand_total: f64,
}

impl fmt::Display for Imbalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "supply ({}) and demand ({}) are not balanced; the allocation was computed without a dummy node and may be misleading.",
            self.supply_total, self.demand_total
        )
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TransportReport {
    pub problem: TransportProblem,
    pub allocation: Allocation,
    pub imbalance: Option<Imbalance>,
}

impl fmt::Display for TransportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(imbalance) = &self.imbalance {
            writeln!(f, "Notice: {imbalance}")?;
        }
        writeln!(f, "NW-corner feasible allocation (quick):")?;
        for row in &self.allocation.quantities {
            let cells: Vec<String> = row.iter().map(|q| format!("{q:>8}")).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        write!(f, "Total cost = {}", self.allocation.total_cost)
    }
}
