//! Resource discovery from a directory on disk.

use crate::error::EmbeddedError;
use crate::logical_path;
use fs_err as fs;
use locale_catalog_core::{MessageCatalog, ResourceEntry};
use locale_catalog_toml::I18nConfig;
use path_slash::PathExt as _;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collects every `*.json` fragment below `root`, sorted by logical path.
pub fn load_directory(root: &Path) -> Result<Vec<ResourceEntry>, EmbeddedError> {
    if !root.is_dir() {
        return Err(EmbeddedError::MissingAssetsDir(root.to_path_buf()));
    }

    let mut entries = Vec::new();
    for dir_entry in WalkDir::new(root).sort_by_file_name() {
        let dir_entry = dir_entry?;
        if !dir_entry.file_type().is_file() {
            continue;
        }

        let file_path = dir_entry.path();
        let relative = file_path
            .strip_prefix(root)
            .ok()
            .and_then(|relative| relative.to_slash())
            .ok_or_else(|| EmbeddedError::UnmappablePath {
                path: file_path.to_path_buf(),
                root: root.to_path_buf(),
            })?;

        let Some(path) = logical_path(&relative) else {
            tracing::debug!("Skipping non-resource file '{}'", file_path.display());
            continue;
        };

        let content = fs::read_to_string(file_path)?;
        entries.push(ResourceEntry::from_json(path, &content)?);
    }

    entries.sort_by(|a, b| a.path.cmp(&b.path));
    tracing::debug!(
        "Discovered {} resources under '{}'",
        entries.len(),
        root.display()
    );
    Ok(entries)
}

/// A project's configuration together with the catalog built from its assets.
#[derive(Debug)]
pub struct ProjectCatalog {
    pub config: I18nConfig,
    pub assets_dir: PathBuf,
    pub catalog: MessageCatalog,
}

/// Reads `i18n.toml` from `project_dir`, validates it and builds the catalog from its assets.
pub fn load_project(project_dir: &Path) -> Result<ProjectCatalog, EmbeddedError> {
    let config = I18nConfig::from_dir(project_dir)?;
    config.validate()?;

    let assets_dir = config.assets_dir_from_base(project_dir);
    let catalog = MessageCatalog::from_entries(load_directory(&assets_dir)?)?;

    Ok(ProjectCatalog {
        config,
        assets_dir,
        catalog,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use unic_langid::langid;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn load_directory_maps_paths() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "en-US/common.json", r#"{"hello": "Hi"}"#);
        write(root, "en-US.json", r#"{"title": "Home"}"#);
        write(root, "notes.md", "ignored");

        let paths: Vec<String> = load_directory(root)
            .unwrap()
            .into_iter()
            .map(|entry| entry.path)
            .collect();

        assert_eq!(paths, vec!["en-US", "en-US/common"]);
    }

    #[test]
    fn load_directory_reports_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "en-US/common.json", "{ not json");

        assert!(matches!(
            load_directory(temp_dir.path()),
            Err(EmbeddedError::Resource(_))
        ));
    }

    #[test]
    fn load_directory_requires_existing_root() {
        let temp_dir = TempDir::new().unwrap();

        assert!(matches!(
            load_directory(&temp_dir.path().join("missing")),
            Err(EmbeddedError::MissingAssetsDir(_))
        ));
    }

    #[test]
    fn load_project_builds_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(
            root,
            "i18n.toml",
            "fallback_language = \"en-US\"\nsupported_languages = [\"en-US\", \"zh-CN\"]\nassets_dir = \"locales\"\n",
        );
        write(root, "locales/en-US/common.json", r#"{"hello": "Hi"}"#);
        write(root, "locales/zh-CN/common.json", r#"{"hello": "你好"}"#);

        let project = load_project(root).unwrap();

        assert_eq!(project.assets_dir, root.join("locales"));
        assert_eq!(
            project.catalog.lookup(&langid!("zh-CN"), "common.hello"),
            Some("你好")
        );
    }
}
