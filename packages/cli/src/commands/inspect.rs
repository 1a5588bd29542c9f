use super::{find_component, DocumentArgs};
use crate::config::Config;
use anyhow::{anyhow, Result};
use canopy_evaluator::resolve_style;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Component containing the layer
    pub component: String,

    /// Layer whose effective style to print
    pub layer: String,

    /// Viewport width in pixels (overrides config)
    #[arg(short, long)]
    pub width: Option<f64>,

    #[command(flatten)]
    pub document: DocumentArgs,
}

pub fn inspect(args: InspectArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let doc = args.document.load(&config, cwd)?;
    let component = find_component(&doc, &args.component)?;

    let layer = doc
        .find_layer_in_component(&component.id, &args.layer)
        .ok_or_else(|| {
            anyhow!(
                "Layer '{}' not found in component '{}'",
                args.layer,
                component.id
            )
        })?;

    let style = resolve_style(layer, &doc.tokens, args.width.unwrap_or(config.default_width))?;
    args.document.write(&style)
}
