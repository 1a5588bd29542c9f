//! # Canopy Evaluator
//!
//! Turns a layer tree, the shared design tokens, a viewport width and a set
//! of bound property values into a render instruction tree.
//!
//! Two entry points are exposed to collaborators:
//!
//! - [`compose`] resolves a full layer tree, expanding component instances
//!   in place.
//! - [`resolve_style`] resolves the effective style of a single layer, for
//!   inspection tools that do not need a subtree.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use canopy_evaluator::compose;
//! use canopy_model::{Document, PropertyValues};
//!
//! let doc = Document::from_json(&source)?;
//! let layout = doc.component("card").and_then(|c| c.layout.as_ref()).unwrap();
//! let tree = compose(layout, &doc.tokens, &doc.components, 1024.0, &PropertyValues::new())?;
//! ```

pub mod composer;
pub mod error;
pub mod overrides;
pub mod preview;
pub mod render;
pub mod style_resolver;


#[cfg(test)]
mod tests_composition;

pub use composer::{compose, Composer};
pub use error::{EvalError, EvalResult};
pub use overrides::apply_overrides;
pub use preview::{render_component_examples, ArtboardRender, ExampleRender};
pub use render::{Attributes, RenderNode, ResolvedStyle};
pub use style_resolver::{resolve_style, StyleResolver};
