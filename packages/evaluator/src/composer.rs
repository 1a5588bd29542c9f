//! # Layer Tree Composer
//!
//! Walks a layer tree and produces the render instruction tree for one
//! viewport width and one set of bound property values.
//!
//! ## Determinism
//!
//! Composition is a pure function of `(layer, tokens, components, width,
//! bound props)`. Nothing is cached between calls and the inputs are only
//! read, so composing twice yields structurally identical trees and
//! independent subtrees can be composed in parallel.
//!
//! ## Component instances
//!
//! An instance layer is replaced by the referenced component's layout,
//! composed with the instance's own `props`. The outer bound props are
//! dropped at the instance boundary; they never leak into nested instances.
//!
//! ## Recursion Protection
//!
//! The ids of the components currently being expanded are tracked on a
//! stack. Expanding a component that is already on the stack fails with
//! `CyclicComposition` instead of recursing forever.
//!
//! ## Errors
//!
//! There is no error recovery: an unresolved reference, an invalid length,
//! a missing component or a cycle anywhere aborts the whole composition.

use crate::error::{EvalError, EvalResult};
use crate::overrides::{apply_overrides, value_to_text, CONTENT_PROP, TEXT_PROP};
use crate::render::{Attributes, RenderNode};
use crate::style_resolver::resolve_style;
use canopy_model::{
    Component, ComponentRegistry, Layer, LayerKind, Length, PropertyValues, TableKind, TokenStore,
};
use tracing::{debug, error, instrument};

/// Compose `layer` into a render tree
pub fn compose(
    layer: &Layer,
    tokens: &TokenStore,
    components: &ComponentRegistry,
    viewport_width: f64,
    bound_props: &PropertyValues,
) -> EvalResult<RenderNode> {
    Composer::new(tokens, components, viewport_width).compose(layer, bound_props)
}

/// Composition pass over one document snapshot at one viewport width
pub struct Composer<'a> {
    tokens: &'a TokenStore,
    components: &'a ComponentRegistry,
    viewport_width: f64,
    /// Components being expanded, outermost first
    component_stack: Vec<String>,
}

impl<'a> Composer<'a> {
    pub fn new(tokens: &'a TokenStore, components: &'a ComponentRegistry, viewport_width: f64) -> Self {
        Self {
            tokens,
            components,
            viewport_width,
            component_stack: Vec::new(),
        }
    }

    #[instrument(skip(self, layer, bound_props), fields(layer_id = %layer.id, kind = layer.kind.name(), prop_count = bound_props.len()))]
    pub fn compose(&mut self, layer: &Layer, bound_props: &PropertyValues) -> EvalResult<RenderNode> {
        match &layer.kind {
            LayerKind::Component {
                component_id,
                props,
            } => self.compose_instance(layer, component_id, props),

            LayerKind::Text { text } => {
                let base = Attributes::from([(TEXT_PROP.to_string(), text.clone().into())]);
                let mut attributes = apply_overrides(base, layer, bound_props);
                let content = attributes
                    .remove(TEXT_PROP)
                    .map(|value| value_to_text(&value))
                    .unwrap_or_default();

                Ok(self
                    .element(layer)?
                    .with_attributes(attributes)
                    .with_child(RenderNode::text(content)))
            }

            LayerKind::Image { src, alt } => {
                let mut base = Attributes::new();
                if let Some(src) = src {
                    base.insert("src".to_string(), src.clone().into());
                }
                if let Some(alt) = alt {
                    base.insert("alt".to_string(), alt.clone().into());
                }
                if let Some(height) = &layer.style.height {
                    base.insert("height".to_string(), length_attribute(height, layer)?);
                }
                if let Some(width) = &layer.style.width {
                    base.insert("width".to_string(), length_attribute(width, layer)?);
                }

                let attributes = apply_overrides(base, layer, bound_props);
                Ok(self.element(layer)?.with_attributes(attributes))
            }

            LayerKind::Link {
                href,
                content,
                children,
            } => {
                let mut base = Attributes::new();
                if let Some(href) = href {
                    base.insert("href".to_string(), href.clone().into());
                }
                if let Some(content) = content {
                    base.insert(CONTENT_PROP.to_string(), content.clone().into());
                }
                let mut attributes = apply_overrides(base, layer, bound_props);
                let content = attributes.remove(CONTENT_PROP);

                let node = self.element(layer)?.with_attributes(attributes);
                if !children.is_empty() {
                    let children = self.compose_children(children, bound_props)?;
                    Ok(node.with_children(children))
                } else if let Some(content) = content {
                    Ok(node.with_child(RenderNode::text(value_to_text(&content))))
                } else {
                    Ok(node)
                }
            }

            LayerKind::Container { children } => {
                let attributes = apply_overrides(Attributes::new(), layer, bound_props);
                let children = self.compose_children(children, bound_props)?;
                Ok(self
                    .element(layer)?
                    .with_attributes(attributes)
                    .with_children(children))
            }
        }
    }

    /// Compose a component's layout with `props` as its bound properties
    #[instrument(skip(self, component, props), fields(component_id = %component.id, prop_count = props.len()))]
    pub fn compose_component(
        &mut self,
        component: &Component,
        props: &PropertyValues,
    ) -> EvalResult<RenderNode> {
        if self.component_stack.contains(&component.id) {
            let mut chain = self.component_stack.clone();
            chain.push(component.id.clone());

            error!(component_id = %component.id, chain = ?chain, "Circular component dependency detected");
            return Err(EvalError::CyclicComposition {
                component_id: component.id.clone(),
                chain,
            });
        }

        let layout = match &component.layout {
            Some(layout) => layout,
            None => {
                debug!(component_id = %component.id, "Component has no layout");
                return Ok(RenderNode::Empty);
            }
        };

        self.component_stack.push(component.id.clone());
        let result = self.compose(layout, props);
        self.component_stack.pop();

        result
    }

    fn compose_instance(
        &mut self,
        layer: &Layer,
        component_id: &str,
        props: &PropertyValues,
    ) -> EvalResult<RenderNode> {
        let components = self.components;
        let component = components
            .resolve(TableKind::Component, component_id)
            .map_err(|err| {
                error!(layer_id = %layer.id, component_id, "Component not found");
                EvalError::at_layer(err, &layer.id)
            })?;

        debug!(
            layer_id = %layer.id,
            component_id,
            stack = ?self.component_stack,
            "Expanding component instance"
        );

        // The instance's props replace the outer scope entirely
        self.compose_component(component, props)
    }

    fn compose_children(
        &mut self,
        children: &[Layer],
        bound_props: &PropertyValues,
    ) -> EvalResult<Vec<RenderNode>> {
        children
            .iter()
            .map(|child| self.compose(child, bound_props))
            .collect()
    }

    /// Element for a non-instance layer with its resolved style
    fn element(&self, layer: &Layer) -> EvalResult<RenderNode> {
        let style = resolve_style(layer, self.tokens, self.viewport_width)?;
        // Only component instances lack a tag and they never reach here
        let tag = layer.tag_name().unwrap_or_default();
        Ok(RenderNode::element(tag, &layer.id).with_style(style))
    }
}

fn length_attribute(length: &Length, layer: &Layer) -> EvalResult<serde_json::Value> {
    length
        .to_css()
        .map(serde_json::Value::from)
        .map_err(|err| EvalError::at_layer(err, &layer.id))
}
