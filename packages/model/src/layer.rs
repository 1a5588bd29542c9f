use crate::component::PropertyValues;
use crate::style::{LayerStyle, MediaQuery};
use serde::{Deserialize, Serialize};

/// Declares that `layer_prop` on a layer may be rebound from the bound
/// property `prop_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Override {
    pub layer_prop: String,
    pub prop_id: String,
}

impl Override {
    pub fn new(layer_prop: impl Into<String>, prop_id: impl Into<String>) -> Self {
        Self {
            layer_prop: layer_prop.into(),
            prop_id: prop_id.into(),
        }
    }
}

/// A node of a component's visual tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Explicit tag; falls back to the kind's default tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default)]
    pub style: LayerStyle,
    #[serde(default)]
    pub media_queries: Vec<MediaQuery>,
    #[serde(default)]
    pub overrides: Vec<Override>,
    #[serde(flatten)]
    pub kind: LayerKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayerKind {
    Container {
        #[serde(default)]
        children: Vec<Layer>,
    },
    Text {
        #[serde(default)]
        text: String,
    },
    Image {
        #[serde(default)]
        src: Option<String>,
        #[serde(default)]
        alt: Option<String>,
    },
    Link {
        #[serde(default)]
        href: Option<String>,
        /// Rendered only when the link has no child layers
        #[serde(default)]
        content: Option<String>,
        #[serde(default)]
        children: Vec<Layer>,
    },
    /// Instance of another component, expanded in place
    Component {
        #[serde(rename = "componentId")]
        component_id: String,
        #[serde(default)]
        props: PropertyValues,
    },
}

impl LayerKind {
    /// Default tag for the kind. Component instances have no tag of their own.
    pub fn default_tag(&self) -> Option<&'static str> {
        match self {
            LayerKind::Container { .. } => Some("div"),
            LayerKind::Text { .. } => Some("span"),
            LayerKind::Image { .. } => Some("img"),
            LayerKind::Link { .. } => Some("a"),
            LayerKind::Component { .. } => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LayerKind::Container { .. } => "container",
            LayerKind::Text { .. } => "text",
            LayerKind::Image { .. } => "image",
            LayerKind::Link { .. } => "link",
            LayerKind::Component { .. } => "component",
        }
    }
}

impl Layer {
    fn with_kind(id: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            id: id.into(),
            name: None,
            tag: None,
            style: LayerStyle::default(),
            media_queries: Vec::new(),
            overrides: Vec::new(),
            kind,
        }
    }

    pub fn container(id: impl Into<String>, children: Vec<Layer>) -> Self {
        Self::with_kind(id, LayerKind::Container { children })
    }

    pub fn text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_kind(id, LayerKind::Text { text: text.into() })
    }

    pub fn image(id: impl Into<String>, src: impl Into<String>) -> Self {
        Self::with_kind(
            id,
            LayerKind::Image {
                src: Some(src.into()),
                alt: None,
            },
        )
    }

    pub fn link(id: impl Into<String>, href: impl Into<String>, children: Vec<Layer>) -> Self {
        Self::with_kind(
            id,
            LayerKind::Link {
                href: Some(href.into()),
                content: None,
                children,
            },
        )
    }

    pub fn instance(
        id: impl Into<String>,
        component_id: impl Into<String>,
        props: PropertyValues,
    ) -> Self {
        Self::with_kind(
            id,
            LayerKind::Component {
                component_id: component_id.into(),
                props,
            },
        )
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_style(mut self, style: LayerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_media_query(mut self, media_query: MediaQuery) -> Self {
        self.media_queries.push(media_query);
        self
    }

    pub fn with_override(mut self, layer_prop: impl Into<String>, prop_id: impl Into<String>) -> Self {
        self.overrides.push(Override::new(layer_prop, prop_id));
        self
    }

    /// Tag to render with: the explicit tag, else the kind's default
    pub fn tag_name(&self) -> Option<&str> {
        self.tag.as_deref().or_else(|| self.kind.default_tag())
    }

    /// Declared child layers (empty for leaves and component instances)
    pub fn children(&self) -> &[Layer] {
        match &self.kind {
            LayerKind::Container { children } | LayerKind::Link { children, .. } => children,
            LayerKind::Text { .. } | LayerKind::Image { .. } | LayerKind::Component { .. } => &[],
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<Layer>> {
        match &mut self.kind {
            LayerKind::Container { children } | LayerKind::Link { children, .. } => Some(children),
            LayerKind::Text { .. } | LayerKind::Image { .. } | LayerKind::Component { .. } => None,
        }
    }
}

/// A layer found in a tree, with its parent when it is not the root
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerMatch<'a> {
    pub layer: &'a Layer,
    pub parent: Option<&'a Layer>,
}

/// Depth-first search for `id` starting at `root`
pub fn find_layer<'a>(root: &'a Layer, id: &str) -> Option<LayerMatch<'a>> {
    if root.id == id {
        return Some(LayerMatch {
            layer: root,
            parent: None,
        });
    }
    find_in_children(root, id)
}

fn find_in_children<'a>(parent: &'a Layer, id: &str) -> Option<LayerMatch<'a>> {
    for child in parent.children() {
        if child.id == id {
            return Some(LayerMatch {
                layer: child,
                parent: Some(parent),
            });
        }
        if let Some(found) = find_in_children(child, id) {
            return Some(found);
        }
    }
    None
}

/// New tree with the layer sharing `new_layer.id` swapped for `new_layer`.
/// Returns `root` unchanged when no layer matches.
pub fn replace_layer(root: &Layer, new_layer: &Layer) -> Layer {
    if root.id == new_layer.id {
        return new_layer.clone();
    }
    let mut updated = root.clone();
    if let Some(children) = updated.children_mut() {
        *children = root
            .children()
            .iter()
            .map(|child| replace_layer(child, new_layer))
            .collect();
    }
    updated
}
