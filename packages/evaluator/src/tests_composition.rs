/// Composition tests: per-kind rendering, overrides, component expansion
use crate::*;
use canopy_model::{Document, Layer, PropertyValues, TableKind};
use serde_json::json;

#[cfg(test)]
mod composition_tests {
    use super::*;

    fn document(components: serde_json::Value) -> Document {
        serde_json::from_value(json!({
            "colors": [{ "id": "brand", "value": "#3366FF" }],
            "fontFamilies": [{ "id": "sans", "value": "Inter" }],
            "fontWeights": [{ "id": "regular", "value": 400 }],
            "breakpoints": [{ "id": "md", "value": { "type": "px", "value": 600 } }],
            "components": components
        }))
        .expect("Failed to build document")
    }

    fn layer(value: serde_json::Value) -> Layer {
        serde_json::from_value(value).expect("Failed to build layer")
    }

    fn props(value: serde_json::Value) -> PropertyValues {
        serde_json::from_value(value).expect("Failed to build props")
    }

    fn compose_in(doc: &Document, layer: &Layer, bound: &PropertyValues) -> EvalResult<RenderNode> {
        compose(layer, &doc.tokens, &doc.components, 1024.0, bound)
    }

    #[test]
    fn test_container_children_in_declared_order() {
        let doc = document(json!([]));
        let root = layer(json!({
            "type": "container",
            "id": "root",
            "children": [
                { "type": "text", "id": "a", "text": "A" },
                { "type": "text", "id": "b", "text": "B" },
                { "type": "container", "id": "c", "children": [] }
            ]
        }));

        let node = compose_in(&doc, &root, &PropertyValues::new()).unwrap();
        assert_eq!(node.tag(), Some("div"));
        assert_eq!(node.layer_id(), Some("root"));
        let ids: Vec<_> = node.children().iter().filter_map(RenderNode::layer_id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(node.text_content(), "AB");
        assert_eq!(node.style().and_then(|s| s.get("opacity")), Some("1"));
    }

    #[test]
    fn test_text_override_replaces_literal() {
        let doc = document(json!([]));
        let text = layer(json!({
            "type": "text",
            "id": "label",
            "text": "Default",
            "overrides": [{ "layerProp": "text", "propId": "p1" }]
        }));

        let node = compose_in(&doc, &text, &props(json!({ "p1": "Hello" }))).unwrap();
        assert_eq!(node.children(), &[RenderNode::text("Hello")]);
        assert!(node.attribute("text").is_none());

        let node = compose_in(&doc, &text, &props(json!({ "p1": null }))).unwrap();
        assert_eq!(node.text_content(), "Default");

        let node = compose_in(&doc, &text, &PropertyValues::new()).unwrap();
        assert_eq!(node.text_content(), "Default");
    }

    #[test]
    fn test_non_string_text_override() {
        let doc = document(json!([]));
        let text = Layer::text("count", "0").with_override("text", "n");

        let node = compose_in(&doc, &text, &props(json!({ "n": 42 }))).unwrap();
        assert_eq!(node.text_content(), "42");
    }

    #[test]
    fn test_image_is_a_leaf_with_attributes() {
        let doc = document(json!([]));
        let image = layer(json!({
            "type": "image",
            "id": "avatar",
            "src": "default.png",
            "alt": "Avatar",
            "style": {
                "width": { "type": "px", "value": 48 },
                "height": { "type": "px", "value": 48 }
            },
            "overrides": [{ "layerProp": "src", "propId": "avatarUrl" }]
        }));

        let node = compose_in(&doc, &image, &props(json!({ "avatarUrl": "me.png" }))).unwrap();
        assert_eq!(node.tag(), Some("img"));
        assert!(node.children().is_empty());
        assert_eq!(node.attribute("src"), Some(&json!("me.png")));
        assert_eq!(node.attribute("alt"), Some(&json!("Avatar")));
        assert_eq!(node.attribute("width"), Some(&json!("48px")));
        assert_eq!(node.attribute("height"), Some(&json!("48px")));
    }

    #[test]
    fn test_link_without_children_renders_content() {
        let doc = document(json!([]));
        let link = layer(json!({
            "type": "link",
            "id": "home",
            "href": "/home",
            "content": "Home",
            "overrides": [{ "layerProp": "href", "propId": "target" }]
        }));

        let node = compose_in(&doc, &link, &props(json!({ "target": "/start" }))).unwrap();
        assert_eq!(node.tag(), Some("a"));
        assert_eq!(node.attribute("href"), Some(&json!("/start")));
        assert_eq!(node.children(), &[RenderNode::text("Home")]);
        assert!(node.attribute("content").is_none());
    }

    #[test]
    fn test_link_content_can_be_rebound() {
        let doc = document(json!([]));
        let link = layer(json!({
            "type": "link",
            "id": "home",
            "href": "/home",
            "content": "Home",
            "overrides": [{ "layerProp": "content", "propId": "label" }]
        }));

        let node = compose_in(&doc, &link, &props(json!({ "label": "Start here" }))).unwrap();
        assert_eq!(node.children(), &[RenderNode::text("Start here")]);
        assert!(node.attribute("content").is_none());

        let node = compose_in(&doc, &link, &props(json!({ "label": null }))).unwrap();
        assert_eq!(node.children(), &[RenderNode::text("Home")]);
    }

    #[test]
    fn test_link_with_children_ignores_content() {
        let doc = document(json!([]));
        let link = layer(json!({
            "type": "link",
            "id": "home",
            "href": "/home",
            "content": "Ignored",
            "children": [{ "type": "text", "id": "label", "text": "Go home" }]
        }));

        let node = compose_in(&doc, &link, &PropertyValues::new()).unwrap();
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.text_content(), "Go home");
    }

    #[test]
    fn test_explicit_tag_wins() {
        let doc = document(json!([]));
        let heading = Layer::text("h", "Title").with_tag("h1");

        let node = compose_in(&doc, &heading, &PropertyValues::new()).unwrap();
        assert_eq!(node.tag(), Some("h1"));
    }

    #[test]
    fn test_instance_expands_referenced_layout() {
        let doc = document(json!([{
            "id": "button",
            "name": "Button",
            "layout": {
                "type": "container",
                "id": "button-root",
                "tag": "button",
                "children": [{
                    "type": "text",
                    "id": "button-label",
                    "text": "Click",
                    "overrides": [{ "layerProp": "text", "propId": "label" }]
                }]
            }
        }]));
        let root = layer(json!({
            "type": "container",
            "id": "root",
            "children": [{
                "type": "component",
                "id": "cta",
                "componentId": "button",
                "props": { "label": "Buy now" }
            }]
        }));

        let node = compose_in(&doc, &root, &PropertyValues::new()).unwrap();
        let button = &node.children()[0];
        assert_eq!(button.tag(), Some("button"));
        assert_eq!(button.layer_id(), Some("button-root"));
        assert_eq!(button.text_content(), "Buy now");
    }

    #[test]
    fn test_instance_props_do_not_inherit_outer_props() {
        let doc = document(json!([
            {
                "id": "b",
                "name": "B",
                "layout": {
                    "type": "text",
                    "id": "b-text",
                    "text": "unset",
                    "overrides": [{ "layerProp": "text", "propId": "x" }]
                }
            },
            {
                "id": "a",
                "name": "A",
                "layout": {
                    "type": "container",
                    "id": "a-root",
                    "children": [
                        {
                            "type": "text",
                            "id": "a-text",
                            "text": "unset",
                            "overrides": [{ "layerProp": "text", "propId": "x" }]
                        },
                        { "type": "component", "id": "b-1", "componentId": "b", "props": { "x": 1 } },
                        { "type": "component", "id": "b-2", "componentId": "b" }
                    ]
                }
            }
        ]));

        let a = doc.component("a").unwrap();
        let node = Composer::new(&doc.tokens, &doc.components, 1024.0)
            .compose_component(a, &props(json!({ "x": 99 })))
            .unwrap();

        let texts: Vec<String> = node.children().iter().map(RenderNode::text_content).collect();
        assert_eq!(texts, vec!["99", "1", "unset"]);
    }

    #[test]
    fn test_instance_of_component_without_layout_is_empty() {
        let doc = document(json!([{ "id": "blank", "name": "Blank" }]));
        let root = Layer::container(
            "root",
            vec![Layer::instance("i", "blank", PropertyValues::new())],
        );

        let node = compose_in(&doc, &root, &PropertyValues::new()).unwrap();
        assert_eq!(node.children(), &[RenderNode::Empty]);
    }

    #[test]
    fn test_missing_component_fails() {
        let doc = document(json!([]));
        let root = Layer::container(
            "root",
            vec![Layer::instance("i", "ghost", PropertyValues::new())],
        );

        let err = compose_in(&doc, &root, &PropertyValues::new()).unwrap_err();
        assert_eq!(
            err,
            EvalError::UnresolvedComponent {
                component_id: "ghost".to_string(),
                layer_id: "i".to_string(),
            }
        );
    }

    #[test]
    fn test_broken_reference_deep_in_tree_fails_whole_composition() {
        let doc = document(json!([]));
        let root = layer(json!({
            "type": "container",
            "id": "root",
            "children": [
                { "type": "text", "id": "fine", "text": "ok" },
                {
                    "type": "container",
                    "id": "inner",
                    "children": [{
                        "type": "text",
                        "id": "broken",
                        "text": "x",
                        "style": { "color": { "type": "ref", "id": "missing" } }
                    }]
                }
            ]
        }));

        let err = compose_in(&doc, &root, &PropertyValues::new()).unwrap_err();
        assert_eq!(
            err,
            EvalError::UnresolvedReference {
                kind: TableKind::Color,
                id: "missing".to_string(),
                layer_id: "broken".to_string(),
            }
        );
    }

    #[test]
    fn test_viewport_width_reaches_nested_instances() {
        let doc = document(json!([{
            "id": "badge",
            "name": "Badge",
            "layout": {
                "type": "text",
                "id": "badge-text",
                "text": "New",
                "mediaQueries": [{
                    "minWidth": { "id": "md" },
                    "style": { "color": { "type": "ref", "id": "brand" } }
                }]
            }
        }]));
        let root = Layer::container("root", vec![Layer::instance("i", "badge", PropertyValues::new())]);

        let narrow = compose(&root, &doc.tokens, &doc.components, 320.0, &PropertyValues::new()).unwrap();
        let wide = compose(&root, &doc.tokens, &doc.components, 1024.0, &PropertyValues::new()).unwrap();

        let color = |node: &RenderNode| {
            node.find_by_layer("badge-text")
                .and_then(RenderNode::style)
                .and_then(|s| s.get("color"))
                .map(String::from)
        };
        assert_eq!(color(&narrow), None);
        assert_eq!(color(&wide).as_deref(), Some("#3366FF"));
    }
}
