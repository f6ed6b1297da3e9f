//! Implementation guide manifest
//!
//! The guide's `ImplementationGuide` JSON resource lists every generated
//! page under `definition.page`. Export steps append their pages to the
//! root page's children and the whole resource is written once at the end.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::GuideConfig;
use crate::error::{ExportError, Result};

/// A page in the guide definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEntry {
    pub name_url: String,
    pub title: String,
    pub generation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub page: Vec<PageEntry>,
}

impl PageEntry {
    pub fn new(name_url: &str, title: &str, generation: &str) -> Self {
        Self {
            name_url: name_url.to_string(),
            title: title.to_string(),
            generation: generation.to_string(),
            page: Vec::new(),
        }
    }
}

/// `definition` element of the guide
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Definition {
    pub page: PageEntry,
}

/// The `ImplementationGuide` resource written alongside generated pages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationGuide {
    pub resource_type: String,
    pub id: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    pub date: String,
    pub fhir_version: Vec<String>,
    pub definition: Definition,
}

impl ImplementationGuide {
    /// Start a fresh guide from configuration, with an empty page list
    pub fn from_config(config: &GuideConfig) -> Self {
        let date = config
            .date
            .clone()
            .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());

        Self {
            resource_type: "ImplementationGuide".to_string(),
            id: config.id.clone(),
            url: config.guide_url(),
            version: config.version.clone(),
            name: config.name.clone(),
            title: config.title.clone(),
            status: config.status.clone(),
            publisher: config.publisher.clone(),
            date,
            fhir_version: config.fhir_version.clone(),
            definition: Definition {
                page: PageEntry::new("toc.html", "Table of Contents", "html"),
            },
        }
    }

    /// Ordered child pages of the table of contents
    pub fn pages(&self) -> &[PageEntry] {
        &self.definition.page.page
    }

    /// Mutable access for export steps registering pages
    pub fn pages_mut(&mut self) -> &mut Vec<PageEntry> {
        &mut self.definition.page.page
    }

    /// Output path of the resource under `output_dir`
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir
            .join("input")
            .join(format!("ImplementationGuide-{}.json", self.id))
    }

    /// Write the resource as pretty JSON, returning the path written
    pub fn write(&self, output_dir: &Path) -> Result<PathBuf> {
        let path = self.output_path(output_dir);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content).map_err(|e| ExportError::io(&path, e))?;
        tracing::debug!("Wrote guide resource {:?}", path);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_config() -> GuideConfig {
        GuideConfig {
            id: "fhir.us.minimal".to_string(),
            canonical: "http://hl7.org/fhir/us/minimal".to_string(),
            name: "MinimalIG".to_string(),
            date: Some("2020-02-26".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_config_starts_with_empty_pages() {
        let ig = ImplementationGuide::from_config(&minimal_config());
        assert_eq!(ig.resource_type, "ImplementationGuide");
        assert_eq!(
            ig.url,
            "http://hl7.org/fhir/us/minimal/ImplementationGuide/fhir.us.minimal"
        );
        assert_eq!(ig.definition.page.name_url, "toc.html");
        assert!(ig.pages().is_empty());
    }

    #[test]
    fn test_page_entry_json_shape() {
        let entry = PageEntry::new("index.html", "Home", "markdown");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "nameUrl": "index.html",
                "title": "Home",
                "generation": "markdown"
            })
        );
    }

    #[test]
    fn test_write_creates_input_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut ig = ImplementationGuide::from_config(&minimal_config());
        ig.pages_mut()
            .push(PageEntry::new("index.html", "Home", "html"));

        let path = ig.write(dir.path()).unwrap();
        assert_eq!(
            path,
            dir.path()
                .join("input")
                .join("ImplementationGuide-fhir.us.minimal.json")
        );

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["date"], "2020-02-26");
        assert_eq!(json["fhirVersion"][0], "4.0.1");
        assert_eq!(json["definition"]["page"]["page"][0]["generation"], "html");
    }
}
