//! Figma REST API access.
//!
//! - [`Document`] / [`Node`]: the file's node tree
//! - [`DesignSource`]: load a file and download component SVG exports
//! - [`FigmaClient`]: the reqwest-backed implementation

mod client;
mod document;
mod node;

use rustc_hash::FxHashMap;
use thiserror::Error;

pub use client::FigmaClient;
pub use document::Document;
pub use node::{Node, NodeKind};

/// Component name to SVG markup. The first component with a name wins.
pub type SvgExports = FxHashMap<String, String>;

#[derive(Debug, Error)]
pub enum FigmaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Figma API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of design documents and their rendered components.
#[allow(async_fn_in_trait)]
pub trait DesignSource {
    /// Fetch a file's node tree.
    async fn load(&self, file_key: &str) -> Result<Document, FigmaError>;

    /// Render `components` of `document` as SVG, keyed by component name.
    ///
    /// Components the service could not render are absent from the result.
    async fn download(
        &self,
        document: &Document,
        components: &[&Node],
    ) -> Result<SvgExports, FigmaError>;
}
