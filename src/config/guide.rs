//! Guide configuration (sushi-config.yaml)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ExportError, Result};

/// Configuration file name inside the project ("tank") directory
pub const CONFIG_FILE: &str = "sushi-config.yaml";

/// Main guide configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GuideConfig {
    // Identity
    pub id: String,
    pub canonical: String,
    pub url: Option<String>,
    pub name: String,
    pub title: Option<String>,
    pub status: String,
    pub version: Option<String>,
    pub fhir_version: Vec<String>,
    pub publisher: Option<String>,
    pub date: Option<String>,

    // Pages
    /// Inline markdown used for the guide's home page
    pub index_page_content: Option<String>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            id: "example.guide".to_string(),
            canonical: "http://example.org".to_string(),
            url: None,
            name: "ExampleGuide".to_string(),
            title: None,
            status: "draft".to_string(),
            version: None,
            fhir_version: vec!["4.0.1".to_string()],
            publisher: None,
            date: None,

            index_page_content: None,

            extra: IndexMap::new(),
        }
    }
}

impl GuideConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
        let config: GuideConfig =
            serde_yaml::from_str(&content).map_err(|source| ExportError::Yaml {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `sushi-config.yaml` from a project directory, falling back to defaults
    pub fn load_from_dir<P: AsRef<Path>>(project_dir: P) -> Result<Self> {
        let config_path = project_dir.as_ref().join(CONFIG_FILE);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            tracing::debug!("No {} in {:?}, using defaults", CONFIG_FILE, project_dir.as_ref());
            Ok(Self::default())
        }
    }

    /// Canonical URL of the guide resource
    pub fn guide_url(&self) -> String {
        self.url.clone().unwrap_or_else(|| {
            format!(
                "{}/ImplementationGuide/{}",
                self.canonical.trim_end_matches('/'),
                self.id
            )
        })
    }

    /// Inline index content, treating an empty string as unset
    pub fn index_page_content(&self) -> Option<&str> {
        self.index_page_content.as_deref().filter(|c| !c.is_empty())
    }

    fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ExportError::Config("\"id\" must not be empty".to_string()));
        }
        if self.canonical.trim().is_empty() {
            return Err(ExportError::Config(
                "\"canonical\" must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GuideConfig::default();
        assert_eq!(config.status, "draft");
        assert_eq!(config.fhir_version, vec!["4.0.1"]);
        assert!(config.index_page_content().is_none());
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
id: fhir.us.minimal
canonical: http://hl7.org/fhir/us/minimal
name: MinimalIG
status: active
fhirVersion:
  - 4.0.1
indexPageContent: An index file defined in config
copyrightYear: 2020+
"#;
        let config: GuideConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.id, "fhir.us.minimal");
        assert_eq!(config.name, "MinimalIG");
        assert_eq!(
            config.index_page_content(),
            Some("An index file defined in config")
        );
        assert!(config.extra.contains_key("copyrightYear"));
    }

    #[test]
    fn test_empty_index_page_content_is_unset() {
        let config = GuideConfig {
            index_page_content: Some(String::new()),
            ..Default::default()
        };
        assert!(config.index_page_content().is_none());
    }

    #[test]
    fn test_whitespace_index_page_content_is_kept() {
        let config: GuideConfig = serde_yaml::from_str("indexPageContent: \"  \"\n").unwrap();
        assert_eq!(config.index_page_content(), Some("  "));
    }

    #[test]
    fn test_guide_url_from_canonical() {
        let config = GuideConfig {
            id: "fhir.us.minimal".to_string(),
            canonical: "http://hl7.org/fhir/us/minimal/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.guide_url(),
            "http://hl7.org/fhir/us/minimal/ImplementationGuide/fhir.us.minimal"
        );
    }

    #[test]
    fn test_load_rejects_empty_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "id: ''\ncanonical: http://example.org\n").unwrap();
        let err = GuideConfig::load(&path).unwrap_err();
        assert!(matches!(err, ExportError::Config(_)));
    }

    #[test]
    fn test_load_from_dir_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GuideConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.id, GuideConfig::default().id);
    }
}
