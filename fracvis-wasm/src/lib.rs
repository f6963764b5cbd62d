//! WASM bindings for the visual fraction exercise generator.
//!
//! This crate exposes the fracvis-core library to the browser UI: the UI
//! asks for a fresh exercise, renders the returned cells as SVG, tracks the
//! learner's selection, and calls back in to check it.

use fracvis_core::{generate, selection_units_sum, ShapeKind, ShapeSpec};
use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};
use wasm_bindgen::prelude::*;
use wasm_bindgen_console_logger::DEFAULT_LOGGER;

/// Initializes the logging system for WASM.
///
/// Sets up console logging and panic hooks for better error reporting in
/// the browser. Should be called once at application startup.
#[wasm_bindgen]
pub fn init_logs() {
    match log::set_logger(&DEFAULT_LOGGER) {
        Ok(_) => info!("Initialized console.logger"),
        Err(e) => error!("failed to set console.logger: {}", e),
    };
    console_error_panic_hook::set_once();
}

/// Updates the log level filter.
///
/// # Arguments
/// * `level` - Log level string: "error", "warn", "info", "debug", or
///   "trace". Defaults to "info" if empty or null.
#[wasm_bindgen]
pub fn update_log_level(level: JsValue) {
    let level: Option<String> = serde_wasm_bindgen::from_value(level).unwrap();
    let level = fracvis_core::parse_log_level(level.as_deref());
    log::set_max_level(level);
}

/// Generates a fresh exercise.
///
/// # Arguments
/// * `kind` - Shape kind: "triangle", "square", "hexagon", "circle", or
///   "auto" (uniform random pick).
/// * `difficulty` - Difficulty level (1 or 2 in practice; maps to the
///   subdivision depth).
/// * `seed` - Optional RNG seed for deterministic replay; when null the
///   exercise is seeded from entropy.
///
/// # Returns
/// A [`ShapeSpec`]: the weighted cells to render plus the target fraction.
///
/// # Panics
/// If `kind` is not a recognized shape name, or generation fails (which
/// indicates a configuration defect, not a runtime condition).
#[wasm_bindgen]
pub fn generate_exercise(kind: String, difficulty: u32, seed: Option<u64>) -> JsValue {
    let kind: ShapeKind = kind.parse().expect("unrecognized shape kind");
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let spec = generate(kind, difficulty, &mut rng).expect("exercise generation failed");
    serde_wasm_bindgen::to_value(&spec).unwrap()
}

/// Checks a learner's selection against an exercise's target.
///
/// # Arguments
/// * `spec` - Exercise produced by [`generate_exercise`].
/// * `selected` - Indices of the cells the learner toggled on.
///
/// # Returns
/// True iff the selected cells' units sum to the target exactly.
#[wasm_bindgen]
pub fn check_selection(spec: JsValue, selected: JsValue) -> bool {
    let spec: ShapeSpec = serde_wasm_bindgen::from_value(spec).unwrap();
    let selected: Vec<usize> = serde_wasm_bindgen::from_value(selected).unwrap();
    spec.is_correct(selection_units_sum(&spec.cells, &selected))
}
