pub mod expr;
pub mod number;
pub mod problem;
pub mod request;
pub mod transport;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use expr::{extract_coefficient, parse_linear_expr};
pub use number::parse_leading_f64;
pub use problem::{parse_constraint, parse_constraints, parse_objective};
pub use request::{
    Candidate, DEFAULT_MAX_RANGE, Imbalance, LpReport, LpRequest, Method, RequestError, TransportReport,
    TransportRequest,
};
pub use transport::{parse_cost_matrix, parse_number_list, parse_transport_problem};
