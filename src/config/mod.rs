//! Component manifest (`components.json`).
//!
//! ```json
//! {
//!   "fileId": "FILE_KEY",
//!   "pageName": "Icons",
//!   "mappings": [{ "name": "star", "output": "src/app/icons/star.html" }],
//!   "targets": ["fill"]
//! }
//! ```

mod error;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::log;
use crate::template::Target;
use crate::utils::path::{expand_tilde, normalize_path};

pub use error::ConfigError;

/// Which Figma file and page to read, and where each component goes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Figma file key.
    pub file_id: String,
    /// Page (canvas) holding the components.
    pub page_name: String,
    #[serde(default)]
    pub mappings: Vec<Mapping>,
    /// Attributes `$target(...)` ids may rewrite.
    #[serde(default = "default_targets")]
    pub targets: Vec<Target>,
}

/// Component name and the template file it is written to.
#[derive(Debug, Clone, Deserialize)]
pub struct Mapping {
    pub name: String,
    pub output: PathBuf,
}

fn default_targets() -> Vec<Target> {
    Target::DEFAULT.to_vec()
}

impl Manifest {
    /// Load a manifest, warning about unknown fields.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(normalize_path(path)));
        }

        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let (mut manifest, ignored) = Self::parse_with_ignored(&content)
            .map_err(|err| ConfigError::Json(path.to_path_buf(), err))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        manifest.expand_outputs();
        Ok(manifest)
    }

    /// Parse JSON content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), serde_json::Error> {
        let mut ignored = Vec::new();
        let mut deserializer = serde_json::Deserializer::from_str(content);
        let manifest = serde_ignored::deserialize(&mut deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        deserializer.end()?;
        Ok((manifest, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "ignoring unknown fields in {}: {}", display_path, fields.join(", "));
    }

    fn expand_outputs(&mut self) {
        for mapping in &mut self.mappings {
            mapping.output = expand_tilde(&mapping.output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_manifest(content: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("components.json");
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    #[test]
    fn test_load_manifest() {
        let (_temp, path) = write_manifest(
            r#"{
                "fileId": "abc123",
                "pageName": "Icons",
                "mappings": [
                    { "name": "star", "output": "src/app/star.html" },
                    { "name": "heart", "output": "src/app/heart.html" }
                ]
            }"#,
        );
        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.file_id, "abc123");
        assert_eq!(manifest.page_name, "Icons");
        assert_eq!(manifest.mappings.len(), 2);
        assert_eq!(manifest.mappings[1].name, "heart");
        assert_eq!(manifest.mappings[1].output, Path::new("src/app/heart.html"));
        assert_eq!(manifest.targets, [Target::Fill]);
    }

    #[test]
    fn test_load_targets() {
        let (_temp, path) = write_manifest(
            r#"{ "fileId": "a", "pageName": "p", "mappings": [], "targets": ["fill", "stroke"] }"#,
        );
        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.targets, [Target::Fill, Target::Stroke]);
    }

    #[test]
    fn test_unknown_fields_collected() {
        let (manifest, ignored) = Manifest::parse_with_ignored(
            r#"{ "fileId": "a", "pageName": "p", "version": 2,
                 "mappings": [{ "name": "star", "output": "x", "selector": "app-star" }] }"#,
        )
        .unwrap();
        assert_eq!(manifest.mappings.len(), 1);
        assert_eq!(ignored.len(), 2);
        assert!(ignored.iter().any(|f| f == "version"));
        assert!(ignored.iter().any(|f| f.ends_with("selector")));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.json");
        let err = Manifest::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
        assert!(err.to_string().starts_with("No components JSON found at "));
        assert!(err.to_string().ends_with("nope.json"));
    }

    #[test]
    fn test_load_invalid_json() {
        let (_temp, path) = write_manifest(r#"{ "fileId": "a" "#);
        let err = Manifest::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json(..)));
        let message = err.to_string();
        assert!(message.starts_with("Invalid components JSON at "));
        assert!(message.contains("components.json: "));
        assert!(message.contains("EOF"));
    }

    #[test]
    fn test_load_missing_required_field() {
        let (_temp, path) = write_manifest(r#"{ "fileId": "a", "mappings": [] }"#);
        let err = Manifest::load(&path).unwrap_err();
        assert!(err.to_string().contains("pageName"));
    }

    #[test]
    fn test_load_unknown_target() {
        let (_temp, path) =
            write_manifest(r#"{ "fileId": "a", "pageName": "p", "targets": ["opacity"] }"#);
        assert!(Manifest::load(&path).is_err());
    }

    #[test]
    fn test_trailing_content_rejected() {
        assert!(Manifest::parse_with_ignored(r#"{ "fileId": "a", "pageName": "p" } []"#).is_err());
    }
}
