//! WASM-facing entry points for the spiral vase generator.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests use the `*_internal` helpers, which expose
//! Rust error types directly and never touch a JS host.
//!
//! ```
//! let mesh = spiral_vase_wasm::generate_vase_internal(r#"{"layers": 3, "samplesPerLayer": 8}"#).unwrap();
//! assert_eq!(mesh.vertex_count(), 24);
//! ```

use spiral_vase::{generate, VaseError, VaseParams};
use wasm_bindgen::prelude::*;

mod diagnostics;
mod mesh_handle;
mod session;

pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use mesh_handle::MeshHandle;
pub use session::VaseSession;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "spiral-vase-wasm";
/// // init_panic_hook();
/// ```
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Returns the reference parameter record as JSON, for populating a panel.
///
/// # Examples
/// ```
/// let json = spiral_vase_wasm::default_params_json();
/// assert!(json.contains("\"samplesPerLayer\":200"));
/// ```
#[wasm_bindgen]
pub fn default_params_json() -> String {
    VaseSession::new()
        .params_json_internal()
        .unwrap_or_else(|_| String::from("{}"))
}

/// Generates a vase from a JSON parameter record in one shot.
///
/// Hosts that edit parameters interactively should hold a [`VaseSession`]
/// instead.
///
/// # Errors
/// Returns a [`Diagnostic`] when the record is malformed or rejected.
#[wasm_bindgen]
pub fn generate_vase(params_json: &str) -> Result<MeshHandle, Diagnostic> {
    generate_vase_internal(params_json).map_err(Diagnostic::from)
}

/// Host-only helper behind [`generate_vase`].
pub fn generate_vase_internal(params_json: &str) -> Result<MeshHandle, VaseError> {
    let params = parse_params(params_json)?;
    let mesh = generate(&params)?;
    Ok(MeshHandle::from_mesh(&mesh))
}

/// Generates a vase and returns it as an OBJ document.
///
/// # Errors
/// Returns a [`Diagnostic`] when the record is malformed or rejected.
#[wasm_bindgen]
pub fn generate_obj(params_json: &str) -> Result<String, Diagnostic> {
    generate_obj_internal(params_json).map_err(Diagnostic::from)
}

/// Host-only helper behind [`generate_obj`].
pub fn generate_obj_internal(params_json: &str) -> Result<String, VaseError> {
    let params = parse_params(params_json)?;
    let mesh = generate(&params)?;
    Ok(spiral_vase::export::to_obj_string(&mesh))
}

/// Decodes a host parameter record.
///
/// Only a JSON object is a record; serde would otherwise map an array onto
/// the fields by position.
pub(crate) fn parse_params(json: &str) -> Result<VaseParams, VaseError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| VaseError::Serialization(e.to_string()))?;
    if !value.is_object() {
        return Err(VaseError::Serialization(format!(
            "expected a parameter object, found {}",
            json_kind(&value)
        )));
    }
    serde_json::from_value(value).map_err(|e| VaseError::Serialization(e.to_string()))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
