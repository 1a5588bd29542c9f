use super::{find_component, DocumentArgs};
use crate::config::Config;
use anyhow::{Context, Result};
use canopy_evaluator::Composer;
use canopy_model::PropertyValues;
use clap::Args;
use std::path::Path;
use tracing::info;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Component to render
    pub component: String,

    /// Viewport width in pixels (overrides config)
    #[arg(short, long)]
    pub width: Option<f64>,

    /// Bind the props of one of the component's examples
    #[arg(short, long, conflicts_with = "props")]
    pub example: Option<String>,

    /// Bound props as a JSON object
    #[arg(short, long)]
    pub props: Option<String>,

    #[command(flatten)]
    pub document: DocumentArgs,
}

pub fn render(args: RenderArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let doc = args.document.load(&config, cwd)?;
    let component = find_component(&doc, &args.component)?;
    let width = args.width.unwrap_or(config.default_width);

    let props: PropertyValues = match (&args.example, &args.props) {
        (Some(example_id), _) => component
            .example(example_id)
            .map(|example| example.props.clone())
            .with_context(|| {
                format!("Example '{}' not found on component '{}'", example_id, component.id)
            })?,
        (None, Some(json)) => serde_json::from_str(json).context("--props must be a JSON object")?,
        (None, None) => PropertyValues::new(),
    };

    info!(component = %component.id, width, props = props.len(), "Rendering component");
    let node = Composer::new(&doc.tokens, &doc.components, width).compose_component(component, &props)?;

    args.document.write(&node)
}
