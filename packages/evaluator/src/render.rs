use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Non-style attributes of a rendered element (`href`, `src`, ...)
pub type Attributes = BTreeMap<String, serde_json::Value>;

/// Effective style of one layer: flat properties plus pseudo-class overlays
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    pub properties: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub pseudo_classes: BTreeMap<String, ResolvedStyle>,
}

impl ResolvedStyle {
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    pub fn pseudo_class(&self, name: &str) -> Option<&ResolvedStyle> {
        self.pseudo_classes.get(name)
    }
}

/// Render instruction tree handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderNode {
    Element {
        tag: String,
        /// Id of the layer this element was produced from
        #[serde(rename = "layerId")]
        layer_id: String,
        attributes: Attributes,
        style: ResolvedStyle,
        children: Vec<RenderNode>,
    },

    Text { content: String },

    /// Instance of a component that has no layout
    Empty,
}

impl RenderNode {
    pub fn element(tag: impl Into<String>, layer_id: impl Into<String>) -> Self {
        RenderNode::Element {
            tag: tag.into(),
            layer_id: layer_id.into(),
            attributes: Attributes::new(),
            style: ResolvedStyle::default(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        RenderNode::Text {
            content: content.into(),
        }
    }

    pub fn with_attributes(mut self, new_attributes: Attributes) -> Self {
        if let RenderNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.extend(new_attributes);
        }
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        if let RenderNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_style(mut self, resolved: ResolvedStyle) -> Self {
        if let RenderNode::Element { ref mut style, .. } = self {
            *style = resolved;
        }
        self
    }

    pub fn with_child(mut self, child: RenderNode) -> Self {
        if let RenderNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<RenderNode>) -> Self {
        if let RenderNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            RenderNode::Element { tag, .. } => Some(tag),
            RenderNode::Text { .. } | RenderNode::Empty => None,
        }
    }

    pub fn layer_id(&self) -> Option<&str> {
        match self {
            RenderNode::Element { layer_id, .. } => Some(layer_id),
            RenderNode::Text { .. } | RenderNode::Empty => None,
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&serde_json::Value> {
        match self {
            RenderNode::Element { attributes, .. } => attributes.get(key),
            RenderNode::Text { .. } | RenderNode::Empty => None,
        }
    }

    pub fn style(&self) -> Option<&ResolvedStyle> {
        match self {
            RenderNode::Element { style, .. } => Some(style),
            RenderNode::Text { .. } | RenderNode::Empty => None,
        }
    }

    pub fn children(&self) -> &[RenderNode] {
        match self {
            RenderNode::Element { children, .. } => children,
            RenderNode::Text { .. } | RenderNode::Empty => &[],
        }
    }

    /// Concatenated text of this node and its descendants, in order
    pub fn text_content(&self) -> String {
        match self {
            RenderNode::Text { content } => content.clone(),
            RenderNode::Element { children, .. } => {
                children.iter().map(RenderNode::text_content).collect()
            }
            RenderNode::Empty => String::new(),
        }
    }

    /// First element (depth-first, self included) produced from `layer_id`
    pub fn find_by_layer(&self, layer_id: &str) -> Option<&RenderNode> {
        if self.layer_id() == Some(layer_id) {
            return Some(self);
        }
        self.children()
            .iter()
            .find_map(|child| child.find_by_layer(layer_id))
    }
}
