use canopy_model::{ModelError, TableKind};
use thiserror::Error;

pub type EvalResult<T> = Result<T, EvalError>;

/// Fatal composition errors. Any of these aborts the whole pass; there is
/// no partially rendered tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Unresolved {kind} reference '{id}' in layer '{layer_id}'")]
    UnresolvedReference {
        kind: TableKind,
        id: String,
        layer_id: String,
    },

    #[error("Invalid length unit '{unit}' in layer '{layer_id}' (only 'px' is supported)")]
    InvalidLength { unit: String, layer_id: String },

    #[error("The {kind} table is empty but layer '{layer_id}' needs its first entry as a fallback")]
    EmptyTokenTable { kind: TableKind, layer_id: String },

    #[error("Component '{component_id}' not found (referenced by layer '{layer_id}')")]
    UnresolvedComponent {
        component_id: String,
        layer_id: String,
    },

    #[error("Artboard '{artboard_id}' has an invalid width unit '{unit}'")]
    InvalidArtboard { artboard_id: String, unit: String },

    #[error("Recursive component detected: {component_id}\nCall stack: {}", chain.join(" → "))]
    CyclicComposition {
        component_id: String,
        chain: Vec<String>,
    },

    #[error("Invalid document at layer '{layer_id}': {source}")]
    InvalidDocument {
        layer_id: String,
        #[source]
        source: ModelError,
    },
}

impl EvalError {
    /// Attach the offending layer to a model error
    pub fn at_layer(err: ModelError, layer_id: &str) -> Self {
        let layer_id = layer_id.to_string();
        match err {
            ModelError::UnresolvedReference {
                kind: TableKind::Component,
                id,
            } => EvalError::UnresolvedComponent {
                component_id: id,
                layer_id,
            },
            ModelError::UnresolvedReference { kind, id } => {
                EvalError::UnresolvedReference { kind, id, layer_id }
            }
            ModelError::InvalidLength { unit } => EvalError::InvalidLength { unit, layer_id },
            ModelError::EmptyTokenTable { kind } => EvalError::EmptyTokenTable { kind, layer_id },
            source @ ModelError::DuplicateId { .. } => {
                EvalError::InvalidDocument { layer_id, source }
            }
        }
    }

    /// Id of the layer the error was raised at, when there is one
    pub fn layer_id(&self) -> Option<&str> {
        match self {
            EvalError::UnresolvedReference { layer_id, .. }
            | EvalError::InvalidLength { layer_id, .. }
            | EvalError::EmptyTokenTable { layer_id, .. }
            | EvalError::UnresolvedComponent { layer_id, .. }
            | EvalError::InvalidDocument { layer_id, .. } => Some(layer_id),
            EvalError::InvalidArtboard { .. } | EvalError::CyclicComposition { .. } => None,
        }
    }
}
