use crate::error::ModelResult;
use crate::table::{Keyed, OrderedTable, TableKind};
use crate::values::{Color, Length, TokenRef};
use serde::{Deserialize, Serialize};

/// A named shared design value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token<V> {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: V,
}

impl<V> Token<V> {
    pub fn new(id: impl Into<String>, value: V) -> Self {
        Self {
            id: id.into(),
            name: None,
            value,
        }
    }

    pub fn named(id: impl Into<String>, name: impl Into<String>, value: V) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            value,
        }
    }
}

impl<V> Keyed for Token<V> {
    fn key(&self) -> &str {
        &self.id
    }
}

pub type TokenTable<V> = OrderedTable<Token<V>>;

/// The shared token tables a document renders against
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenStore {
    pub colors: TokenTable<String>,
    pub font_sizes: TokenTable<Length>,
    pub font_families: TokenTable<String>,
    pub font_weights: TokenTable<u16>,
    pub breakpoints: TokenTable<Length>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// CSS text for a color, looking references up in the colors table
    pub fn color(&self, color: &Color) -> ModelResult<String> {
        match color {
            Color::Ref { id } => Ok(self.colors.resolve(TableKind::Color, id)?.value.clone()),
            Color::Hex { value } => Ok(value.clone()),
        }
    }

    pub fn font_size(&self, reference: &TokenRef) -> ModelResult<String> {
        self.font_sizes
            .resolve(TableKind::FontSize, &reference.id)?
            .value
            .to_css()
    }

    /// Resolved family, or the first registered family when unset
    pub fn font_family(&self, reference: Option<&TokenRef>) -> ModelResult<String> {
        let token = match reference {
            Some(reference) => self
                .font_families
                .resolve(TableKind::FontFamily, &reference.id)?,
            None => self.font_families.first_entry(TableKind::FontFamily)?,
        };
        Ok(token.value.clone())
    }

    /// Resolved weight, or the first registered weight when unset
    pub fn font_weight(&self, reference: Option<&TokenRef>) -> ModelResult<u16> {
        let token = match reference {
            Some(reference) => self
                .font_weights
                .resolve(TableKind::FontWeight, &reference.id)?,
            None => self.font_weights.first_entry(TableKind::FontWeight)?,
        };
        Ok(token.value)
    }

    /// Breakpoint width in pixels
    pub fn breakpoint(&self, reference: &TokenRef) -> ModelResult<f64> {
        self.breakpoints
            .resolve(TableKind::Breakpoint, &reference.id)?
            .value
            .to_pixels()
    }
}
