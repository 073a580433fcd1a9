use std::{fs, path::Path};

use serde::Deserialize;

pub const INDEX_TITLE: &str = "Documentation";
pub const INDEX_HREF: &str = "index.html";
pub const DEFAULT_TITLE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Menu label of the index page. A page whose short title equals it is the index.
    pub index_title: String,
    pub index_href: String,
    /// Used when the body has no major heading.
    pub default_title: String,
    pub strip_indent: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_title: INDEX_TITLE.to_string(),
            index_href: INDEX_HREF.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
            strip_indent: false,
        }
    }
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = fs::File::open(path)?;
        Ok(serde_yaml::from_reader(file)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: Config = serde_yaml::from_str("index_title: Manual\n").unwrap();

        assert_eq!(config.index_title, "Manual");
        assert_eq!(config.index_href, INDEX_HREF);
        assert_eq!(config.default_title, DEFAULT_TITLE);
        assert!(!config.strip_indent);
    }

    #[test]
    fn read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("htmlcombine.yaml");
        fs::write(
            &path,
            "index_href: ../index.html\ndefault_title: Untitled\nstrip_indent: true\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.index_title, INDEX_TITLE);
        assert_eq!(config.index_href, "../index.html");
        assert_eq!(config.default_title, "Untitled");
        assert!(config.strip_indent);
    }

    #[test]
    fn unknown_field_is_ignored() {
        let config: Config = serde_yaml::from_str("menu_style: tabs\n").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_file() {
        assert!(Config::from_file("tests/fixtures/not_found.yaml").is_err());
    }
}
