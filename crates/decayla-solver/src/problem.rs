/// Absolute slack allowed on `<=` and `>=` constraints
pub const INEQUALITY_TOLERANCE: f64 = 1e-9;

/// Absolute slack allowed on `=` constraints
pub const EQUALITY_TOLERANCE: f64 = 1e-6;

/// Coefficients of the two decision variables `x1` and `x2`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearExpr {
    pub c1: f64,
    pub c2: f64,
}

impl LinearExpr {
    pub fn new(c1: f64, c2: f64) -> Self {
        Self { c1, c2 }
    }

    /// Value of the expression at `(x1, x2)`
    pub fn eval(&self, x1: f64, x2: f64) -> f64 {
        self.c1 * x1 + self.c2 * x2
    }
}

impl std::fmt::Display for LinearExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x1 ", self.c1)?;
        if self.c2.is_sign_negative() {
            write!(f, "- {}x2", -self.c2)
        } else {
            write!(f, "+ {}x2", self.c2)
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Max,
    Min,
}

impl Sense {
    /// Whether `candidate` strictly beats `incumbent` under this sense.
    /// Ties never improve, so the earliest point found is kept.
    pub fn improves(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Sense::Max => candidate > incumbent,
            Sense::Min => candidate < incumbent,
        }
    }
}

impl std::fmt::Display for Sense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sense::Max => write!(f, "max"),
            Sense::Min => write!(f, "min"),
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Objective {
    /// Whether to maximize or minimize
    pub sense: Sense,
    /// Coefficients of `x1` and `x2`
    pub coeffs: LinearExpr,
}

impl Objective {
    pub fn new(sense: Sense, coeffs: LinearExpr) -> Self {
        Self { sense, coeffs }
    }

    pub fn maximize(c1: f64, c2: f64) -> Self {
        Self::new(Sense::Max, LinearExpr::new(c1, c2))
    }

    pub fn minimize(c1: f64, c2: f64) -> Self {
        Self::new(Sense::Min, LinearExpr::new(c1, c2))
    }

    pub fn eval(&self, x1: f64, x2: f64) -> f64 {
        self.coeffs.eval(x1, x2)
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintOp {
    /// Less than or equal (<=)
    Le,
    /// Greater than or equal (>=)
    Ge,
    /// Equal (=)
    Eq,
}

impl ConstraintOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ConstraintOp::Le => "<=",
            ConstraintOp::Ge => ">=",
            ConstraintOp::Eq => "=",
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    /// Left-hand side coefficients
    pub a: LinearExpr,
    /// Comparison operator
    pub op: ConstraintOp,
    /// Right-hand side value
    pub b: f64,
}

impl Constraint {
    pub fn new(a: LinearExpr, op: ConstraintOp, b: f64) -> Self {
        Self { a, op, b }
    }

    pub fn at_most(c1: f64, c2: f64, b: f64) -> Self {
        Self::new(LinearExpr::new(c1, c2), ConstraintOp::Le, b)
    }

    pub fn at_least(c1: f64, c2: f64, b: f64) -> Self {
        Self::new(LinearExpr::new(c1, c2), ConstraintOp::Ge, b)
    }

    pub fn exactly(c1: f64, c2: f64, b: f64) -> Self {
        Self::new(LinearExpr::new(c1, c2), ConstraintOp::Eq, b)
    }

    /// Check the constraint at `(x1, x2)` within the solver tolerances.
    ///
    /// A `NaN` right-hand side never satisfies `<=`/`>=` but never violates
    /// `=`, since the equality test only rejects a difference that is
    /// provably larger than the tolerance.
    pub fn is_satisfied_by(&self, x1: f64, x2: f64) -> bool {
        let lhs = self.a.eval(x1, x2);
        match self.op {
            ConstraintOp::Le => lhs <= self.b + INEQUALITY_TOLERANCE,
            ConstraintOp::Ge => lhs >= self.b - INEQUALITY_TOLERANCE,
            ConstraintOp::Eq => {
                let diff = (lhs - self.b).abs();
                diff.is_nan() || diff <= EQUALITY_TOLERANCE
            }
        }
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.a, self.op.symbol(), self.b)
    }
}

/// Whether `(x1, x2)` satisfies every constraint, stopping at the first violation
pub fn is_feasible(constraints: &[Constraint], x1: f64, x2: f64) -> bool {
    constraints.iter().all(|c| c.is_satisfied_by(x1, x2))
}
