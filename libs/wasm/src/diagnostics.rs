//! WASM-compatible diagnostics for rejected parameter records.
//!
//! The generator fails the whole call on invalid input; the host shows these
//! next to the offending field.

use spiral_vase::VaseError;
use wasm_bindgen::prelude::*;

/// Why a parameter record was rejected.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A field violates a structural precondition
    InvalidParameter,
    /// The mesh would exceed the configured size limits
    TooLarge,
    /// The record could not be decoded
    Malformed,
    /// Anything else
    Other,
}

/// A diagnostic message for JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try { session.regenerate(); } catch (diag) {
/// //   highlight(diag.field(), diag.message());
/// // }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    field: Option<String>,
    message: String,
}

#[wasm_bindgen]
impl Diagnostic {
    /// Returns the diagnostic kind.
    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    /// Returns the offending parameter name, if one applies.
    pub fn field(&self) -> Option<String> {
        self.field.clone()
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<&VaseError> for Diagnostic {
    fn from(err: &VaseError) -> Self {
        let (kind, field) = match err {
            VaseError::InvalidParameter { name, .. } => {
                (DiagnosticKind::InvalidParameter, Some((*name).to_string()))
            }
            VaseError::TooManyVertices { .. } | VaseError::TooManyFaces { .. } => {
                (DiagnosticKind::TooLarge, None)
            }
            VaseError::Serialization(_) => (DiagnosticKind::Malformed, None),
            VaseError::Io(_) => (DiagnosticKind::Other, None),
        };
        Self {
            kind,
            field,
            message: err.to_string(),
        }
    }
}

impl From<VaseError> for Diagnostic {
    fn from(err: VaseError) -> Self {
        Self::from(&err)
    }
}
