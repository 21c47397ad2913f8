//! `component` command: Figma components to Angular templates.
//!
//! Steps, in order, stopping at the first failure:
//! 1. resolve the access token
//! 2. load `components.json`
//! 3. fetch the Figma file and find the page
//! 4. download SVG exports for every component on the page
//! 5. rewrite and write one template per mapping
//!
//! Templates written before a failing mapping stay on disk.

use std::path::PathBuf;
use thiserror::Error;

use super::ComponentArgs;
use crate::config::{ConfigError, Manifest};
use crate::figma::{DesignSource, Document, FigmaClient, FigmaError, NodeKind};
use crate::markup::{self, MarkupError};
use crate::template::{InstructionParser, rewrite};
use crate::utils::fs::write_output;
use crate::{debug, debug_do};

#[derive(Debug, Error)]
pub enum ComponentError {
    #[error(
        "Missing Figma personal access token. Please provide via --access-token or FIGMA_ACCESS_TOKEN environment variable."
    )]
    MissingToken,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Figma request failed: {0}")]
    Figma(#[from] FigmaError),

    #[error("Page '{0}' doesn't exist")]
    PageNotFound(String),

    #[error("Component '{0}' doesn't exist")]
    ComponentNotFound(String),

    #[error("No SVG export found for '{0}'")]
    SvgNotFound(String),

    #[error("Invalid SVG for '{name}': {source}")]
    Markup {
        name: String,
        #[source]
        source: MarkupError,
    },

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Run the command against the Figma REST API.
///
/// Returns the paths of the written templates.
pub async fn run(args: &ComponentArgs) -> Result<Vec<PathBuf>, ComponentError> {
    let token = args
        .access_token
        .as_deref()
        .filter(|token| !token.trim().is_empty())
        .ok_or(ComponentError::MissingToken)?;

    let manifest = Manifest::load(&args.input)?;
    let client = FigmaClient::new(&args.api_url, token)?;
    generate(&client, &manifest).await
}

/// Generate every mapped template from `source`.
pub async fn generate<S: DesignSource>(
    source: &S,
    manifest: &Manifest,
) -> Result<Vec<PathBuf>, ComponentError> {
    debug!("figma"; "loading Figma document '{}'", manifest.file_id);
    let document = source.load(&manifest.file_id).await?;
    debug!("figma"; "loaded '{}'", document.name);

    let page = document
        .page(&manifest.page_name)
        .ok_or_else(|| ComponentError::PageNotFound(manifest.page_name.clone()))?;
    let components = Document::extract(&[page], NodeKind::Component);
    debug!("figma"; "found {} components on '{}'", components.len(), page.name);

    let svgs = source.download(&document, &components).await?;
    let parser = InstructionParser::new(&manifest.targets);
    debug_do! {
        let targets: Vec<_> = parser.targets().iter().map(|t| t.token()).collect();
        debug!("component"; "binding targets: {}", targets.join(", "));
    }

    let mut written = Vec::with_capacity(manifest.mappings.len());
    for mapping in &manifest.mappings {
        let component = components
            .iter()
            .find(|c| c.name == mapping.name)
            .ok_or_else(|| ComponentError::ComponentNotFound(mapping.name.clone()))?;
        let svg = svgs
            .get(&component.name)
            .ok_or_else(|| ComponentError::SvgNotFound(component.name.clone()))?;

        let mut root = markup::load(svg).map_err(|source| ComponentError::Markup {
            name: component.name.clone(),
            source,
        })?;
        let summary = rewrite(&mut root, &parser);

        write_output(&mapping.output, &root.to_markup()).map_err(|source| {
            ComponentError::Write {
                path: mapping.output.clone(),
                source,
            }
        })?;
        debug!("component"; "generated {} ({} bound {})",
            mapping.output.display(),
            summary.rewritten,
            if summary.rewritten == 1 { "node" } else { "nodes" });
        written.push(mapping.output.clone());
    }

    Ok(written)
}
