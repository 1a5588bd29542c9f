//! Artboard previews: every example of a component rendered at every
//! artboard width.

use crate::composer::Composer;
use crate::error::{EvalError, EvalResult};
use crate::render::RenderNode;
use canopy_model::{Artboard, Component, ComponentExample, Document, ModelError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleRender {
    pub example_id: String,
    pub example_name: String,
    pub node: RenderNode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtboardRender {
    pub artboard_id: String,
    pub artboard_name: String,
    pub width: f64,
    pub examples: Vec<ExampleRender>,
}

/// Render `component` once per artboard and example.
///
/// Artboards come in table order; each artboard renders the implicit
/// default example first, then the component's examples in declared order.
#[instrument(skip(component, document), fields(component_id = %component.id, artboards = document.artboards.len(), examples = component.examples.len()))]
pub fn render_component_examples(
    component: &Component,
    document: &Document,
) -> EvalResult<Vec<ArtboardRender>> {
    info!("Rendering component previews");

    let examples: Vec<ComponentExample> = std::iter::once(ComponentExample::default_example())
        .chain(component.examples.iter().cloned())
        .collect();

    document
        .artboards
        .iter()
        .map(|artboard| render_artboard(component, document, artboard, &examples))
        .collect()
}

fn render_artboard(
    component: &Component,
    document: &Document,
    artboard: &Artboard,
    examples: &[ComponentExample],
) -> EvalResult<ArtboardRender> {
    let width = artboard_width(artboard)?;
    debug!(artboard_id = %artboard.id, width, "Rendering artboard");

    let examples = examples
        .iter()
        .map(|example| -> EvalResult<ExampleRender> {
            let mut composer = Composer::new(&document.tokens, &document.components, width);
            Ok(ExampleRender {
                example_id: example.id.clone(),
                example_name: example.name.clone(),
                node: composer.compose_component(component, &example.props)?,
            })
        })
        .collect::<EvalResult<Vec<_>>>()?;

    Ok(ArtboardRender {
        artboard_id: artboard.id.clone(),
        artboard_name: artboard.name.clone(),
        width,
        examples,
    })
}

fn artboard_width(artboard: &Artboard) -> EvalResult<f64> {
    artboard.width.to_pixels().map_err(|err| match err {
        ModelError::InvalidLength { unit } => EvalError::InvalidArtboard {
            artboard_id: artboard.id.clone(),
            unit,
        },
        other => EvalError::at_layer(other, &artboard.id),
    })
}
