pub mod inspect;
pub mod preview;
pub mod render;

pub use inspect::{inspect, InspectArgs};
pub use preview::{preview, PreviewArgs};
pub use render::{render, RenderArgs};

use crate::config::Config;
use anyhow::{Context, Result};
use canopy_model::{Component, Document};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Options shared by every command that reads a document
#[derive(Debug, Args)]
pub struct DocumentArgs {
    /// Design document (overrides config)
    #[arg(short, long)]
    pub document: Option<PathBuf>,

    /// Write JSON output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl DocumentArgs {
    pub fn load(&self, config: &Config, cwd: &Path) -> Result<Document> {
        let path = match &self.document {
            Some(path) => cwd.join(path),
            None => config.document_path(cwd),
        };
        debug!(path = %path.display(), "Loading document");

        let source = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read document {}", path.display()))?;
        Document::from_json(&source)
            .with_context(|| format!("Invalid document {}", path.display()))
    }

    pub fn write<T: Serialize>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        match &self.output {
            Some(path) => {
                fs::write(path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                eprintln!("{} Wrote {}", "✓".green(), path.display());
            }
            None => println!("{}", json),
        }
        Ok(())
    }
}

pub fn find_component<'a>(doc: &'a Document, id: &str) -> Result<&'a Component> {
    doc.component(id).with_context(|| {
        let known: Vec<&str> = doc.components.iter().map(|c| c.id.as_str()).collect();
        format!("Component '{}' not found (known: {})", id, known.join(", "))
    })
}
