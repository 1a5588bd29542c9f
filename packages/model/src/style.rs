use crate::values::{Color, Length, TokenRef};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    Block,
    Inline,
    InlineBlock,
    Flex,
    None,
}

impl Display {
    pub fn as_css(&self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::Inline => "inline",
            Display::InlineBlock => "inline-block",
            Display::Flex => "flex",
            Display::None => "none",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextDecoration {
    pub is_underlined: bool,
    pub is_striked_through: bool,
}

/// Style overlay active only under a pseudo-class such as `:hover`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PseudoClassStyle {
    pub pseudo_class: String,
    pub style: LayerStyle,
}

/// Flat record of optional style properties.
///
/// The same type serves as a layer's base style, as the partial style of a
/// media query and as a pseudo-class overlay. Unset fields contribute
/// nothing to the cascade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayerStyle {
    // Dimensions
    pub height: Option<Length>,
    pub min_height: Option<Length>,
    pub max_height: Option<Length>,
    pub width: Option<Length>,
    pub min_width: Option<Length>,
    pub max_width: Option<Length>,

    // Margin
    pub margin_top: Option<Length>,
    pub margin_right: Option<Length>,
    pub margin_bottom: Option<Length>,
    pub margin_left: Option<Length>,

    // Padding
    pub padding_top: Option<Length>,
    pub padding_right: Option<Length>,
    pub padding_bottom: Option<Length>,
    pub padding_left: Option<Length>,

    // Display
    pub display: Option<Display>,
    pub flex_direction: Option<String>,
    pub flex_wrap: Option<String>,
    pub justify_content: Option<String>,
    pub align_items: Option<String>,
    pub align_content: Option<String>,

    pub color: Option<Color>,
    pub background_color: Option<Color>,
    pub opacity: Option<f64>,

    pub border_top_left_radius: Option<Length>,
    pub border_top_right_radius: Option<Length>,
    pub border_bottom_right_radius: Option<Length>,
    pub border_bottom_left_radius: Option<Length>,

    // Typography
    pub font_size: Option<TokenRef>,
    pub font_family: Option<TokenRef>,
    pub font_weight: Option<TokenRef>,
    pub line_height: Option<f64>,
    pub letter_spacing: Option<Length>,
    pub text_align: Option<String>,
    pub text_decoration: Option<TextDecoration>,

    /// Pseudo-class overlays in document order
    pub overrides: Vec<PseudoClassStyle>,
}

/// Partial style applied when the viewport is at least as wide as the
/// referenced breakpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaQuery {
    pub min_width: TokenRef,
    pub style: LayerStyle,
}
