//! # Style Cascade
//!
//! Resolves a layer's declared style into one flat property map for a given
//! viewport width.
//!
//! The cascade is `[base, ...active media queries]`, where a media query is
//! active when its breakpoint is at most the viewport width. Active queries
//! are ordered by breakpoint width (ties keep document order), flattened, and
//! merged left to right one property at a time: a later record only
//! overwrites the properties it defines.
//!
//! Defaults sit underneath the whole cascade and fill only what no record
//! defined: `opacity: 1`, `letterSpacing: 0`, `auto` dimensions and the first
//! registered font family and weight.
//!
//! Pseudo-class overlays come from the base style only. Each overlay is its
//! own record with the same defaults underneath; it is not merged with the
//! base.

use crate::error::{EvalError, EvalResult};
use crate::render::ResolvedStyle;
use canopy_model::{
    Display, Layer, LayerStyle, Length, MediaQuery, ModelResult, TextDecoration, TokenStore,
};
use std::collections::BTreeMap;
use tracing::{debug, error, instrument};

type Declarations = BTreeMap<String, String>;

const DIMENSION_PROPERTIES: [&str; 6] = [
    "height",
    "minHeight",
    "maxHeight",
    "width",
    "minWidth",
    "maxWidth",
];

/// Effective style of `layer` at `viewport_width`
#[instrument(skip(layer, tokens), fields(layer_id = %layer.id, media_queries = layer.media_queries.len()))]
pub fn resolve_style(
    layer: &Layer,
    tokens: &TokenStore,
    viewport_width: f64,
) -> EvalResult<ResolvedStyle> {
    StyleResolver::new(tokens, viewport_width)
        .resolve(layer)
        .map_err(|err| {
            error!(layer_id = %layer.id, error = %err, "Style resolution failed");
            EvalError::at_layer(err, &layer.id)
        })
}

/// Resolves layer styles against one token snapshot and viewport width
pub struct StyleResolver<'a> {
    tokens: &'a TokenStore,
    viewport_width: f64,
}

impl<'a> StyleResolver<'a> {
    pub fn new(tokens: &'a TokenStore, viewport_width: f64) -> Self {
        Self {
            tokens,
            viewport_width,
        }
    }

    pub fn resolve(&self, layer: &Layer) -> ModelResult<ResolvedStyle> {
        let cascade = self.cascade(&layer.style, &layer.media_queries)?;

        let records = cascade
            .into_iter()
            .map(|style| self.flatten(style))
            .collect::<ModelResult<Vec<_>>>()?;

        let merged = records
            .into_iter()
            .fold(Declarations::new(), |mut merged, record| {
                merged.extend(record);
                merged
            });

        Ok(ResolvedStyle {
            properties: self.with_defaults(merged)?,
            pseudo_classes: self.pseudo_classes(&layer.style)?,
        })
    }

    /// Base style followed by the active media query styles, narrowest first
    fn cascade<'s>(
        &self,
        base: &'s LayerStyle,
        media_queries: &'s [MediaQuery],
    ) -> ModelResult<Vec<&'s LayerStyle>> {
        let mut active = Vec::with_capacity(media_queries.len());
        for media_query in media_queries {
            let min_width = self.tokens.breakpoint(&media_query.min_width)?;
            if min_width <= self.viewport_width {
                debug!(breakpoint = %media_query.min_width.id, min_width, "Media query active");
                active.push((min_width, &media_query.style));
            } else {
                debug!(breakpoint = %media_query.min_width.id, min_width, "Media query inactive");
            }
        }

        // Stable sort: equal breakpoints keep their document order
        active.sort_by(|(a, _), (b, _)| a.total_cmp(b));

        Ok(std::iter::once(base)
            .chain(active.into_iter().map(|(_, style)| style))
            .collect())
    }

    /// Pseudo-class overlays of `style`, nested overlays included. Each one
    /// gets the defaults but not the media query cascade.
    fn pseudo_classes(&self, style: &LayerStyle) -> ModelResult<BTreeMap<String, ResolvedStyle>> {
        style
            .overrides
            .iter()
            .map(|overlay| -> ModelResult<(String, ResolvedStyle)> {
                let resolved = ResolvedStyle {
                    properties: self.with_defaults(self.flatten(&overlay.style)?)?,
                    pseudo_classes: self.pseudo_classes(&overlay.style)?,
                };
                Ok((overlay.pseudo_class.clone(), resolved))
            })
            .collect()
    }

    /// Properties defined by a single style record, references resolved
    fn flatten(&self, style: &LayerStyle) -> ModelResult<Declarations> {
        let mut declarations = Declarations::new();

        if let Some(display) = style.display {
            declarations.insert("display".to_string(), display.as_css().to_string());
            if display == Display::Flex {
                insert_text(&mut declarations, "flexDirection", &style.flex_direction);
                insert_text(&mut declarations, "flexWrap", &style.flex_wrap);
                insert_text(&mut declarations, "justifyContent", &style.justify_content);
                insert_text(&mut declarations, "alignItems", &style.align_items);
                insert_text(&mut declarations, "alignContent", &style.align_content);
            }
        }

        let lengths = [
            ("height", &style.height),
            ("minHeight", &style.min_height),
            ("maxHeight", &style.max_height),
            ("width", &style.width),
            ("minWidth", &style.min_width),
            ("maxWidth", &style.max_width),
            ("marginTop", &style.margin_top),
            ("marginRight", &style.margin_right),
            ("marginBottom", &style.margin_bottom),
            ("marginLeft", &style.margin_left),
            ("paddingTop", &style.padding_top),
            ("paddingRight", &style.padding_right),
            ("paddingBottom", &style.padding_bottom),
            ("paddingLeft", &style.padding_left),
            ("borderTopLeftRadius", &style.border_top_left_radius),
            ("borderTopRightRadius", &style.border_top_right_radius),
            ("borderBottomRightRadius", &style.border_bottom_right_radius),
            ("borderBottomLeftRadius", &style.border_bottom_left_radius),
            ("letterSpacing", &style.letter_spacing),
        ];
        for (property, length) in lengths {
            insert_length(&mut declarations, property, length.as_ref())?;
        }

        if let Some(color) = &style.color {
            declarations.insert("color".to_string(), self.tokens.color(color)?);
        }
        if let Some(color) = &style.background_color {
            declarations.insert("backgroundColor".to_string(), self.tokens.color(color)?);
        }
        if let Some(opacity) = style.opacity {
            declarations.insert("opacity".to_string(), opacity.to_string());
        }

        if let Some(font_size) = &style.font_size {
            declarations.insert("fontSize".to_string(), self.tokens.font_size(font_size)?);
        }
        if let Some(font_family) = &style.font_family {
            declarations.insert(
                "fontFamily".to_string(),
                self.tokens.font_family(Some(font_family))?,
            );
        }
        if let Some(font_weight) = &style.font_weight {
            declarations.insert(
                "fontWeight".to_string(),
                self.tokens.font_weight(Some(font_weight))?.to_string(),
            );
        }
        if let Some(line_height) = style.line_height {
            declarations.insert("lineHeight".to_string(), line_height.to_string());
        }
        insert_text(&mut declarations, "textAlign", &style.text_align);
        if let Some(decoration) = &style.text_decoration {
            declarations.insert(
                "textDecoration".to_string(),
                text_decoration_to_css(decoration).to_string(),
            );
        }

        Ok(declarations)
    }

    /// Fill properties no record defined. Font fallbacks are only looked up
    /// when needed so an empty table only fails a layer that relies on it.
    fn with_defaults(&self, mut declarations: Declarations) -> ModelResult<Declarations> {
        for property in DIMENSION_PROPERTIES {
            declarations
                .entry(property.to_string())
                .or_insert_with(|| "auto".to_string());
        }
        declarations
            .entry("opacity".to_string())
            .or_insert_with(|| "1".to_string());
        declarations
            .entry("letterSpacing".to_string())
            .or_insert_with(|| "0".to_string());

        if !declarations.contains_key("fontFamily") {
            let family = self.tokens.font_family(None)?;
            declarations.insert("fontFamily".to_string(), family);
        }
        if !declarations.contains_key("fontWeight") {
            let weight = self.tokens.font_weight(None)?;
            declarations.insert("fontWeight".to_string(), weight.to_string());
        }

        Ok(declarations)
    }
}

fn insert_text(declarations: &mut Declarations, property: &str, value: &Option<String>) {
    if let Some(value) = value {
        declarations.insert(property.to_string(), value.clone());
    }
}

fn insert_length(
    declarations: &mut Declarations,
    property: &str,
    length: Option<&Length>,
) -> ModelResult<()> {
    if let Some(length) = length {
        declarations.insert(property.to_string(), length.to_css()?);
    }
    Ok(())
}

fn text_decoration_to_css(decoration: &TextDecoration) -> &'static str {
    match (decoration.is_underlined, decoration.is_striked_through) {
        (true, true) => "underline line-through",
        (true, false) => "underline",
        (false, true) => "line-through",
        (false, false) => "none",
    }
}
