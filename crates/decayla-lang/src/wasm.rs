//! WASM bindings for the decayla web page
//!
//! The page reads its form fields, calls one of these functions and renders
//! the returned object, or shows the error string.

use wasm_bindgen::prelude::*;

use crate::request::{LpRequest, Method, TransportRequest};
use decayla_solver::GridOptions;

/// Solve an LP form. `exact` selects corner-point enumeration instead of the grid search.
#[wasm_bindgen]
pub fn solve_lp(objective: &str, constraints: &str, max_range: u32, step: u32, exact: bool) -> Result<JsValue, JsValue> {
    let method = if exact { Method::Vertex } else { Method::Grid };
    let report = LpRequest::new(objective, constraints)
        .with_options(GridOptions::new().with_max_range(max_range).with_step(step))
        .with_method(method)
        .solve()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let result = LpResult {
        x1: report.best.x1,
        x2: report.best.x2,
        z: report.best.z,
        feasible_count: report.feasible.len(),
        note: report.note(),
    };
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Solve a transportation form with the northwest-corner method
#[wasm_bindgen]
pub fn solve_transport(supply: &str, demand: &str, costs: &str) -> Result<JsValue, JsValue> {
    let report = TransportRequest::new(supply, demand, costs)
        .solve()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let result = TransportResult {
        notice: report.imbalance.map(|i| i.to_string()),
        total_cost: report.allocation.total_cost,
        allocation: report.allocation.quantities,
    };
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct LpResult {
    x1: f64,
    x2: f64,
    z: f64,
    feasible_count: usize,
    note: String,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct TransportResult {
    notice: Option<String>,
    allocation: Vec<Vec<f64>>,
    total_cost: f64,
}
