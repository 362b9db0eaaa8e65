#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Triangle solver: completes a triangle from three of its six measurements
//! (SSS, SAS, SSA, AAS, ASA) and answers shape queries on the result.
//!
//! ```
//! use tri_engine::{Specification, Triangle, solve, solve_with_filter};
//!
//! let t = solve(&Specification::from([("a", 3.0), ("b", 4.0), ("c", 5.0)])).unwrap();
//! assert_eq!(t.area(), 6.0);
//!
//! // SSA with two answers: choose one with a filter.
//! let ssa = Specification::from([("a", 3.0), ("b", 4.0), ("alpha", 0.672_460_005_683_680_7)]);
//! let acute = solve_with_filter(&ssa, Triangle::is_acute).unwrap();
//! assert!((acute.c() - 4.8).abs() < 1e-6);
//! ```
//!
//! The same engine is exported to JavaScript through [`TriangleEngine`].

pub mod solver;

use std::collections::BTreeMap;

use serde::Serialize;
use wasm_bindgen::JsError;
use wasm_bindgen::prelude::*;

pub use solver::{
    Candidates, Case, Closeness, Slot, SlotKind, SlotLabels, SolveError, Solver, Specification,
    Tolerance, Triangle, solve, solve_with_filter, ssa_candidates,
};

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            // no-op fallback when panic hook is disabled
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {
    // no-op fallback when debug logs are disabled
}

#[derive(Debug, Serialize)]
struct TriangleExport {
    values: BTreeMap<String, f64>,
    supplied: Vec<String>,
    area: f64,
    text: String,
}

impl From<&Triangle> for TriangleExport {
    fn from(triangle: &Triangle) -> Self {
        Self {
            values: triangle
                .iter()
                .map(|(label, value)| (label.to_owned(), value))
                .collect(),
            supplied: triangle
                .supplied()
                .iter()
                .map(|slot| triangle.labels().label(*slot).to_owned())
                .collect(),
            area: triangle.area(),
            text: triangle.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CandidatesExport {
    primary: TriangleExport,
    #[serde(skip_serializing_if = "Option::is_none")]
    alternate: Option<TriangleExport>,
}

/// Public entry point for JavaScript consumers.
#[wasm_bindgen]
pub struct TriangleEngine {
    solver: Solver,
}

#[wasm_bindgen]
impl TriangleEngine {
    /// Engine using the default labels `a, b, c` / `alpha, beta, gamma`.
    #[wasm_bindgen(constructor)]
    pub fn new() -> TriangleEngine {
        TriangleEngine {
            solver: Solver::new(),
        }
    }

    /// Engine whose angles are named after three vertices and whose sides
    /// are named after the two vertices they join.
    pub fn with_vertex_names(names: &str) -> Result<TriangleEngine, JsValue> {
        let labels = SlotLabels::from_vertex_names(names).map_err(to_js_error)?;
        Ok(TriangleEngine {
            solver: Solver::with_labels(labels),
        })
    }

    /// Solve a `{label: value}` object. An optional `filter` names a shape
    /// predicate (`acute`, `obtuse`, `not_acute`, `not_obtuse`) used to pick
    /// between SSA solutions.
    #[wasm_bindgen(js_name = solveTriangle)]
    pub fn solve_triangle(&self, spec: JsValue, filter: Option<String>) -> Result<JsValue, JsValue> {
        let spec = spec_from_js(spec)?;
        let triangle = match filter.as_deref() {
            None => self.solver.solve(&spec),
            Some(name) => {
                let predicate = named_filter(name)
                    .ok_or_else(|| js_error(&format!("unknown filter {name:?}")))?;
                self.solver.solve_with_filter(&spec, predicate)
            }
        }
        .map_err(to_js_error)?;

        serde_wasm_bindgen::to_value(&TriangleExport::from(&triangle))
            .map_err(|err| JsError::new(&err.to_string()).into())
    }

    /// Both solutions of an SSA `{label: value}` object.
    #[wasm_bindgen(js_name = ssaCandidates)]
    pub fn ssa_candidates(&self, spec: JsValue) -> Result<JsValue, JsValue> {
        let spec = spec_from_js(spec)?;
        let (primary, alternate) = self.solver.ssa_candidates(&spec).map_err(to_js_error)?;
        let export = CandidatesExport {
            primary: TriangleExport::from(&primary),
            alternate: alternate.as_ref().map(TriangleExport::from),
        };
        serde_wasm_bindgen::to_value(&export).map_err(|err| JsError::new(&err.to_string()).into())
    }

    /// Side-only `{label: value}` object for three 2-D points.
    #[wasm_bindgen(js_name = triangleFromCoordinates)]
    pub fn triangle_from_coordinates(
        &self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    ) -> Result<JsValue, JsValue> {
        let spec = Specification::from_coordinates_with_labels(
            [x0, y0],
            [x1, y1],
            [x2, y2],
            self.solver.labels(),
        );
        let entries: BTreeMap<&str, f64> = spec
            .entries()
            .iter()
            .map(|(label, value)| (label.as_str(), *value))
            .collect();
        serde_wasm_bindgen::to_value(&entries).map_err(|err| JsError::new(&err.to_string()).into())
    }
}

impl Default for TriangleEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn spec_from_js(value: JsValue) -> Result<Specification, JsValue> {
    let entries: BTreeMap<String, f64> = serde_wasm_bindgen::from_value(value)
        .map_err(|err| js_error(&format!("invalid specification: {err}")))?;
    Ok(entries.into_iter().collect())
}

fn named_filter(name: &str) -> Option<fn(&Triangle) -> bool> {
    match name {
        "acute" => Some(Triangle::is_acute),
        "obtuse" => Some(Triangle::is_obtuse),
        "not_acute" => Some(Triangle::is_not_acute),
        "not_obtuse" => Some(Triangle::is_not_obtuse),
        "pythagorean" => Some(Triangle::is_pythagorean),
        _ => None,
    }
}

fn to_js_error(err: SolveError) -> JsValue {
    js_error(&err.to_string())
}

fn js_error(message: &str) -> JsValue {
    JsError::new(message).into()
}
