use crate::layer::Layer;
use crate::table::{Keyed, OrderedTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bound property values: property id to arbitrary value
pub type PropertyValues = BTreeMap<String, serde_json::Value>;

/// Named set of property values used to preview a component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentExample {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub props: PropertyValues,
}

impl ComponentExample {
    /// The implicit example every component is previewed with
    pub fn default_example() -> Self {
        Self {
            id: "default".to_string(),
            name: "Default".to_string(),
            props: PropertyValues::new(),
        }
    }
}

/// A named, reusable layer tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    pub name: String,
    /// A component without a layout renders nothing
    #[serde(default)]
    pub layout: Option<Layer>,
    #[serde(default)]
    pub examples: Vec<ComponentExample>,
}

impl Component {
    pub fn new(id: impl Into<String>, name: impl Into<String>, layout: Option<Layer>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            layout,
            examples: Vec::new(),
        }
    }

    pub fn with_example(mut self, id: impl Into<String>, name: impl Into<String>, props: PropertyValues) -> Self {
        self.examples.push(ComponentExample {
            id: id.into(),
            name: name.into(),
            props,
        });
        self
    }

    pub fn example(&self, id: &str) -> Option<&ComponentExample> {
        self.examples.iter().find(|example| example.id == id)
    }
}

impl Keyed for Component {
    fn key(&self) -> &str {
        &self.id
    }
}

pub type ComponentRegistry = OrderedTable<Component>;
