use crate::error::{Result, SiftError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_HIGHLIGHT_CLASS: &str = "highlighted-tag";

/// How filter results are rendered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Html,
    #[default]
    Ansi,
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Html => "html",
            OutputFormat::Ansi => "ansi",
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "ansi" => Ok(OutputFormat::Ansi),
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(SiftError::Config(format!("Unknown format: {}", other))),
        }
    }
}

/// Configuration for tagsift, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiftConfig {
    /// CSS class put on the span wrapping a highlighted match
    #[serde(default = "default_highlight_class")]
    pub highlight_class: String,

    /// Output format used when `--format` is not given
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Strings that commit the pending input as a tag
    #[serde(default = "default_separators")]
    pub separators: Vec<String>,
}

fn default_highlight_class() -> String {
    DEFAULT_HIGHLIGHT_CLASS.to_string()
}

fn default_separators() -> Vec<String> {
    vec![",".to_string(), "\n".to_string()]
}

impl Default for SiftConfig {
    fn default() -> Self {
        Self {
            highlight_class: default_highlight_class(),
            default_format: OutputFormat::default(),
            separators: default_separators(),
        }
    }
}

impl SiftConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: SiftConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Returns the value for a config key as it would be displayed.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "highlight-class" => Ok(self.highlight_class.clone()),
            "format" => Ok(self.default_format.to_string()),
            "separators" => Ok(self
                .separators
                .iter()
                .map(|s| s.escape_default().to_string())
                .collect::<Vec<_>>()
                .join(" ")),
            other => Err(SiftError::Config(format!("Unknown config key: {}", other))),
        }
    }

    /// Sets a config key from its textual value.
    ///
    /// `separators` takes a whitespace separated list; `\n` is accepted for newline.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "highlight-class" => {
                let class = value.trim();
                if class.is_empty() || class.contains(char::is_whitespace) {
                    return Err(SiftError::Config(format!(
                        "Invalid highlight class: '{}'",
                        value
                    )));
                }
                self.highlight_class = class.to_string();
            }
            "format" => self.default_format = value.parse()?,
            "separators" => {
                let separators: Vec<String> = value
                    .split_whitespace()
                    .map(|s| if s == "\\n" { "\n".to_string() } else { s.to_string() })
                    .collect();
                if separators.is_empty() {
                    return Err(SiftError::Config(
                        "At least one separator is required".to_string(),
                    ));
                }
                self.separators = separators;
            }
            other => {
                return Err(SiftError::Config(format!("Unknown config key: {}", other)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiftConfig::default();
        assert_eq!(config.highlight_class, "highlighted-tag");
        assert_eq!(config.default_format, OutputFormat::Ansi);
        assert_eq!(config.separators, vec![",", "\n"]);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiftConfig::load(dir.path()).unwrap();
        assert_eq!(config, SiftConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");

        let mut config = SiftConfig::default();
        config.set("highlight-class", "mark").unwrap();
        config.set("format", "html").unwrap();
        config.save(&nested).unwrap();

        let loaded = SiftConfig::load(&nested).unwrap();
        assert_eq!(loaded.highlight_class, "mark");
        assert_eq!(loaded.default_format, OutputFormat::Html);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"default_format": "plain"}"#,
        )
        .unwrap();

        let config = SiftConfig::load(dir.path()).unwrap();
        assert_eq!(config.default_format, OutputFormat::Plain);
        assert_eq!(config.highlight_class, DEFAULT_HIGHLIGHT_CLASS);
    }

    #[test]
    fn test_set_separators() {
        let mut config = SiftConfig::default();
        config.set("separators", "; \\n").unwrap();
        assert_eq!(config.separators, vec![";", "\n"]);
        assert_eq!(config.get("separators").unwrap(), "; \\n");
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = SiftConfig::default();
        assert!(config.set("format", "xml").is_err());
        assert!(config.set("highlight-class", "two words").is_err());
        assert!(config.set("separators", "   ").is_err());
        assert!(config.set("nope", "x").is_err());
        assert!(config.get("nope").is_err());
        assert_eq!(config, SiftConfig::default());
    }
}
