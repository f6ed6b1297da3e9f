//! Initialize a new guide project

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::CONFIG_FILE;
use crate::index::INLINE_CANDIDATE;
use crate::IG_DATA_DIR;

/// Initialize a new project in the given directory
pub fn init_project(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("File already exists: {:?}", config_path);
    }

    let index_path = target_dir
        .join(IG_DATA_DIR)
        .join(INLINE_CANDIDATE.relative_path());
    if let Some(parent) = index_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let name = target_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("example");

    let config_content = format!(
        r#"# Guide Configuration

id: example.{name}
canonical: http://example.org/fhir/{name}
name: ExampleGuide
title: Example Implementation Guide
status: draft
version: 0.1.0
fhirVersion:
  - 4.0.1
publisher: Example Publisher

# Home page content. When set, this is used instead of
# ig-data/input/pagecontent/index.md or ig-data/input/pages/index.md.
# indexPageContent: Welcome to the guide.
"#,
        name = name
    );
    fs::write(&config_path, config_content)?;

    if !index_path.exists() {
        fs::write(
            &index_path,
            "# Example Implementation Guide\n\nThis is the home page of the guide.\n",
        )?;
    }

    tracing::debug!("Created {:?} and {:?}", config_path, index_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GuideConfig;

    #[test]
    fn test_init_creates_loadable_project() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("minimal");
        fs::create_dir_all(&project).unwrap();

        init_project(&project).unwrap();

        let config = GuideConfig::load(project.join(CONFIG_FILE)).unwrap();
        assert_eq!(config.id, "example.minimal");
        assert!(config.index_page_content().is_none());
        assert!(project
            .join("ig-data/input/pagecontent/index.md")
            .is_file());
    }

    #[test]
    fn test_init_refuses_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "id: mine\n").unwrap();
        assert!(init_project(dir.path()).is_err());
        assert_eq!(
            fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap(),
            "id: mine\n"
        );
    }
}
