//! # Canopy Model
//!
//! Immutable snapshot types for a Canopy design document: design tokens,
//! components, their layer trees and the artboards they are previewed on.
//!
//! Everything here is plain data. Documents are read once from JSON and are
//! never mutated by the evaluator; edits go through the copy-on-write helpers
//! on [`OrderedTable`] and [`replace_layer`], which return new values.

pub mod component;
pub mod document;
pub mod error;
pub mod layer;
pub mod style;
pub mod table;
pub mod tokens;
pub mod values;

pub use component::{Component, ComponentExample, ComponentRegistry, PropertyValues};
pub use document::{Artboard, Document};
pub use error::{ModelError, ModelResult};
pub use layer::{find_layer, replace_layer, Layer, LayerKind, LayerMatch, Override};
pub use style::{Display, LayerStyle, MediaQuery, PseudoClassStyle, TextDecoration};
pub use table::{Keyed, OrderedTable, TableKind};
pub use tokens::{Token, TokenStore, TokenTable};
pub use values::{Color, Length, TokenRef};
