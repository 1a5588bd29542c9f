//! Override Application
//!
//! Rebinds structural layer attributes (text content, link target, image
//! source, ...) from the bound property values of the current component
//! instance. Styles never go through here.

use crate::render::Attributes;
use canopy_model::{Layer, PropertyValues};
use tracing::debug;

/// Layer prop that holds a text layer's content
pub const TEXT_PROP: &str = "text";

/// Layer prop that holds a childless link's content
pub const CONTENT_PROP: &str = "content";

/// Apply `layer`'s overrides to `base`. A bound value that is absent or
/// `null` leaves the base attribute as it is.
pub fn apply_overrides(base: Attributes, layer: &Layer, bound_props: &PropertyValues) -> Attributes {
    layer.overrides.iter().fold(base, |mut attributes, binding| {
        match bound_props.get(&binding.prop_id) {
            Some(value) if !value.is_null() => {
                debug!(
                    layer_id = %layer.id,
                    layer_prop = %binding.layer_prop,
                    prop_id = %binding.prop_id,
                    "Applying override"
                );
                attributes.insert(binding.layer_prop.clone(), value.clone());
            }
            _ => {}
        }
        attributes
    })
}

/// Text form of an attribute value: strings as-is, anything else as JSON
pub fn value_to_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
