use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};

pub const PIXELS: &str = "px";

/// A length with a unit tag.
///
/// Any unit deserializes so a document with an unknown unit still loads;
/// the unit is checked when the length is resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Length {
    #[serde(rename = "type")]
    pub unit: String,
    pub value: f64,
}

impl Length {
    pub fn px(value: f64) -> Self {
        Self {
            unit: PIXELS.to_string(),
            value,
        }
    }

    /// Numeric pixel value, failing for any non-pixel unit
    pub fn to_pixels(&self) -> ModelResult<f64> {
        if self.unit == PIXELS {
            Ok(self.value)
        } else {
            Err(ModelError::InvalidLength {
                unit: self.unit.clone(),
            })
        }
    }

    /// CSS text for the length, e.g. `12px`
    pub fn to_css(&self) -> ModelResult<String> {
        // f64 Display drops a trailing ".0", so 12.0 renders as "12px"
        self.to_pixels().map(|value| format!("{}{}", value, PIXELS))
    }
}

/// Reference to a token (or component) by id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenRef {
    pub id: String,
}

impl TokenRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Color {
    /// Points at an entry of the colors table
    Ref { id: String },
    /// Inline literal such as `#FF0000`
    Hex { value: String },
}

impl Color {
    pub fn reference(id: impl Into<String>) -> Self {
        Color::Ref { id: id.into() }
    }

    pub fn hex(value: impl Into<String>) -> Self {
        Color::Hex {
            value: value.into(),
        }
    }
}
