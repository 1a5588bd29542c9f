use crate::table::TableKind;
use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Unresolved {kind} reference '{id}'")]
    UnresolvedReference { kind: TableKind, id: String },

    #[error("Cannot take the first entry of the empty {kind} table")]
    EmptyTokenTable { kind: TableKind },

    #[error("Invalid length unit '{unit}' (only 'px' is supported)")]
    InvalidLength { unit: String },

    #[error("Duplicate id '{id}'")]
    DuplicateId { id: String },
}
