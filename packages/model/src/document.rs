use crate::component::{Component, ComponentRegistry};
use crate::layer::{find_layer, Layer};
use crate::table::{Keyed, OrderedTable};
use crate::tokens::TokenStore;
use crate::values::Length;
use serde::{Deserialize, Serialize};

/// Viewport a component is previewed at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artboard {
    pub id: String,
    pub name: String,
    pub width: Length,
    pub height: Length,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl Keyed for Artboard {
    fn key(&self) -> &str {
        &self.id
    }
}

/// A complete design document snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(flatten)]
    pub tokens: TokenStore,
    #[serde(default)]
    pub components: ComponentRegistry,
    #[serde(default)]
    pub artboards: OrderedTable<Artboard>,
}

impl Document {
    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source)
    }

    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.get(id)
    }

    /// Layer `layer_id` inside the layout of component `component_id`
    pub fn find_layer_in_component(&self, component_id: &str, layer_id: &str) -> Option<&Layer> {
        let layout = self.component(component_id)?.layout.as_ref()?;
        find_layer(layout, layer_id).map(|found| found.layer)
    }
}
