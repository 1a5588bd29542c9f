use super::{find_component, DocumentArgs};
use crate::config::Config;
use anyhow::{bail, Result};
use canopy_evaluator::render_component_examples;
use clap::Args;
use colored::Colorize;
use std::path::Path;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Component to preview on every artboard
    pub component: String,

    #[command(flatten)]
    pub document: DocumentArgs,
}

pub fn preview(args: PreviewArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let doc = args.document.load(&config, cwd)?;
    let component = find_component(&doc, &args.component)?;

    if doc.artboards.is_empty() {
        bail!("Document has no artboards to preview on");
    }

    let previews = render_component_examples(component, &doc)?;
    for preview in &previews {
        eprintln!(
            "  {} {} ({}px) - {} examples",
            "✓".green(),
            preview.artboard_name,
            preview.width,
            preview.examples.len()
        );
    }

    args.document.write(&previews)
}
