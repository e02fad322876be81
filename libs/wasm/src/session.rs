//! # Vase Session
//!
//! Explicit host context: the current parameter record, whether it changed
//! since the last run, and the mesh of the last successful run.
//!
//! Edits only mark the session dirty. Generation happens on an explicit
//! `regenerate` request; hosts that want debouncing call
//! `regenerate_if_dirty` from their own timer. A failed run leaves the
//! previous mesh in place.

use crate::diagnostics::Diagnostic;
use crate::mesh_handle::MeshHandle;
use spiral_vase::export::to_obj_string;
use spiral_vase::{generate, EnvelopeSweep, PolygonMesh, SineSweep, VaseError, VaseParams};
use wasm_bindgen::prelude::*;

/// Parameters plus the last generated mesh.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct VaseSession {
    params: VaseParams,
    dirty: bool,
    mesh: Option<PolygonMesh>,
    generation: u32,
}

impl Default for VaseSession {
    fn default() -> Self {
        Self::with_params(VaseParams::default())
    }
}

#[wasm_bindgen]
impl VaseSession {
    /// Creates a session with the reference parameters. Nothing is
    /// generated until the first `regenerate`.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when parameters changed since the last successful run.
    #[wasm_bindgen(getter)]
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    /// Number of successful runs so far.
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Current parameters as JSON.
    pub fn params_json(&self) -> Result<String, Diagnostic> {
        self.params_json_internal().map_err(Diagnostic::from)
    }

    /// Replaces the parameters from a JSON record. Missing fields take the
    /// reference defaults.
    pub fn set_params_json(&mut self, json: &str) -> Result<(), Diagnostic> {
        self.set_params_json_internal(json).map_err(Diagnostic::from)
    }

    /// Sets the number of layers.
    pub fn set_layers(&mut self, layers: i32) {
        self.update(|p| p.layers = layers);
    }

    /// Sets the vertical spacing between layers.
    pub fn set_layer_height(&mut self, layer_height: f64) {
        self.update(|p| p.layer_height = layer_height);
    }

    /// Sets the number of samples per layer.
    pub fn set_samples_per_layer(&mut self, samples: i32) {
        self.update(|p| p.samples_per_layer = samples);
    }

    /// Sets the nominal layer radius.
    pub fn set_major_radius(&mut self, radius: f64) {
        self.update(|p| p.major_radius = radius);
    }

    /// Sets the scale wave.
    pub fn set_scale_wave(&mut self, start_angle: f64, end_angle: f64, amplitude: f64) {
        self.update(|p| p.scale_wave = SineSweep::new(start_angle, end_angle, amplitude));
    }

    /// Sets the rotation wave.
    pub fn set_rotation_wave(&mut self, start_angle: f64, end_angle: f64, magnitude: f64) {
        self.update(|p| p.rotation_wave = SineSweep::new(start_angle, end_angle, magnitude));
    }

    /// Sets the ripple amplitude.
    pub fn set_minor_radius(&mut self, radius: f64) {
        self.update(|p| p.minor_radius = radius);
    }

    /// Sets the ripple frequency.
    pub fn set_minor_frequency(&mut self, frequency: i32) {
        self.update(|p| p.minor_frequency = frequency);
    }

    /// Sets the ripple envelope.
    pub fn set_minor_envelope(&mut self, start_angle: f64, end_angle: f64, cutoff_layers: f64) {
        self.update(|p| p.minor_envelope = EnvelopeSweep::new(start_angle, end_angle, cutoff_layers));
    }

    /// Generates a fresh mesh from the current parameters.
    ///
    /// On failure the previous mesh stays current and the session stays
    /// dirty.
    pub fn regenerate(&mut self) -> Result<MeshHandle, Diagnostic> {
        self.regenerate_internal()
            .map(MeshHandle::from_mesh)
            .map_err(Diagnostic::from)
    }

    /// Regenerates only if parameters changed. Returns whether a new mesh
    /// was produced.
    pub fn regenerate_if_dirty(&mut self) -> Result<bool, Diagnostic> {
        if !self.dirty {
            return Ok(false);
        }
        self.regenerate_internal().map_err(Diagnostic::from)?;
        Ok(true)
    }

    /// Triangle buffers of the current mesh, if any.
    pub fn mesh(&self) -> Option<MeshHandle> {
        self.mesh.as_ref().map(MeshHandle::from_mesh)
    }

    /// The current mesh as an OBJ document, if any.
    pub fn to_obj(&self) -> Option<String> {
        self.mesh.as_ref().map(to_obj_string)
    }
}

impl VaseSession {
    /// Creates a dirty session holding `params`.
    pub fn with_params(params: VaseParams) -> Self {
        Self {
            params,
            dirty: true,
            mesh: None,
            generation: 0,
        }
    }

    /// Current parameters.
    pub fn params(&self) -> &VaseParams {
        &self.params
    }

    /// The mesh of the last successful run.
    pub fn current_mesh(&self) -> Option<&PolygonMesh> {
        self.mesh.as_ref()
    }

    /// Applies `edit` to the parameters; marks dirty only on a real change.
    pub fn update(&mut self, edit: impl FnOnce(&mut VaseParams)) {
        let mut next = self.params.clone();
        edit(&mut next);
        if next != self.params {
            self.params = next;
            self.dirty = true;
        }
    }

    /// Serializes the current parameters.
    pub fn params_json_internal(&self) -> Result<String, VaseError> {
        serde_json::to_string(&self.params).map_err(|e| VaseError::Serialization(e.to_string()))
    }

    /// Decodes and installs a parameter record. A malformed record (not an
    /// object, unknown keys, wrong types) leaves the current parameters
    /// untouched.
    pub fn set_params_json_internal(&mut self, json: &str) -> Result<(), VaseError> {
        let params = crate::parse_params(json)?;
        self.update(|p| *p = params);
        Ok(())
    }

    /// Runs generation and swaps in the new mesh on success.
    pub fn regenerate_internal(&mut self) -> Result<&PolygonMesh, VaseError> {
        let mesh = match generate(&self.params) {
            Ok(mesh) => mesh,
            Err(err) => {
                tracing::warn!(error = %err, "vase regeneration rejected");
                return Err(err);
            }
        };
        self.generation += 1;
        self.dirty = false;
        tracing::info!(
            generation = self.generation,
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "vase regenerated"
        );
        Ok(self.mesh.insert(mesh))
    }
}
