/// Configuration management for the route finder
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const DEFAULT_FORMAT: &str = "text";
const DEFAULT_LOG_LEVEL: &str = "info";
const SUPPORTED_FORMATS: [&str; 3] = ["text", "json", "markdown"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub graph: GraphSettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSettings {
    /// Edge list used when no `--edges` argument is given
    pub edges_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    pub format: String,
    pub output_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graph: GraphSettings { edges_file: None },
            output: OutputSettings {
                format: DEFAULT_FORMAT.to_string(),
                output_file: None,
            },
            logging: LoggingSettings {
                level: DEFAULT_LOG_LEVEL.to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from file
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub async fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }

    /// Defaults overlaid with `ROUTE_FINDER_*` environment variables
    pub fn load_from_env() -> Result<Self> {
        let mut config = Config::default();
        config.apply_env();
        Ok(config)
    }

    /// Layered configuration: defaults, then the file (when given and
    /// present), then environment variables. Later layers win.
    pub async fn load_layered<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut config = match path {
            Some(path) if path.as_ref().exists() => {
                info!("Loading configuration from: {:?}", path.as_ref());
                Self::load_from_file(path.as_ref()).await?
            }
            Some(path) => {
                warn!("Configuration file not found: {:?}. Using defaults.", path.as_ref());
                Config::default()
            }
            None => Config::default(),
        };

        config.apply_env();
        Ok(config)
    }

    /// Override settings with `ROUTE_FINDER_*` environment variables
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Override every setting for which `lookup` returns a value
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(edges_file) = lookup("ROUTE_FINDER_EDGES_FILE") {
            self.graph.edges_file = Some(PathBuf::from(edges_file));
        }

        if let Some(format) = lookup("ROUTE_FINDER_OUTPUT_FORMAT") {
            self.output.format = format;
        }

        if let Some(output_file) = lookup("ROUTE_FINDER_OUTPUT_FILE") {
            self.output.output_file = Some(PathBuf::from(output_file));
        }

        if let Some(level) = lookup("ROUTE_FINDER_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let format = self.output.format.to_lowercase();
        if !SUPPORTED_FORMATS.contains(&format.as_str()) {
            return Err(anyhow::anyhow!(
                "Unsupported output format '{}', expected one of: {}",
                self.output.format,
                SUPPORTED_FORMATS.join(", ")
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(anyhow::anyhow!("Log level must not be empty"));
        }

        if let Some(path) = &self.graph.edges_file {
            if path.as_os_str().is_empty() {
                return Err(anyhow::anyhow!("Edges file path must not be empty"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_config_save_and_load() {
        let mut config = Config::default();
        config.graph.edges_file = Some(PathBuf::from("links.yaml"));
        let temp_file = NamedTempFile::new().unwrap();

        config.save_to_file(temp_file.path()).await.unwrap();
        let loaded_config = Config::load_from_file(temp_file.path()).await.unwrap();

        assert_eq!(loaded_config.graph.edges_file, Some(PathBuf::from("links.yaml")));
        assert_eq!(config.output.format, loaded_config.output.format);
        assert_eq!(config.logging.level, loaded_config.logging.level);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.output.format = "Markdown".to_string();
        assert!(config.validate().is_ok());

        config.output.format = "xml".to_string();
        assert!(config.validate().is_err());

        config = Config::default();
        config.logging.level = "  ".to_string();
        assert!(config.validate().is_err());

        config = Config::default();
        config.graph.edges_file = Some(PathBuf::new());
        assert!(config.validate().is_err());
    }

    fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_overrides_replace_only_given_settings() {
        let mut config = Config::default();
        config.graph.edges_file = Some(PathBuf::from("base.yaml"));

        config.apply_overrides(lookup(&[
            ("ROUTE_FINDER_OUTPUT_FORMAT", "json"),
            ("ROUTE_FINDER_LOG_LEVEL", "debug"),
        ]));

        assert_eq!(config.output.format, "json");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.graph.edges_file, Some(PathBuf::from("base.yaml")));
        assert_eq!(config.output.output_file, None);
    }

    #[test]
    fn test_override_wins_even_when_file_holds_a_default_value() {
        let mut config: Config = serde_yaml::from_str(
            "graph:\n  edges_file: file.yaml\noutput:\n  format: json\n  output_file: null\nlogging:\n  level: info\n",
        )
        .unwrap();

        config.apply_overrides(lookup(&[
            ("ROUTE_FINDER_OUTPUT_FORMAT", "text"),
            ("ROUTE_FINDER_EDGES_FILE", "env.txt"),
        ]));

        assert_eq!(config.output.format, "text");
        assert_eq!(config.graph.edges_file, Some(PathBuf::from("env.txt")));
    }

    #[tokio::test]
    async fn test_load_layered_reads_file_then_env() {
        let mut file_config = Config::default();
        file_config.output.format = "markdown".to_string();
        let temp_file = NamedTempFile::new().unwrap();
        file_config.save_to_file(temp_file.path()).await.unwrap();

        let loaded = Config::load_layered(Some(temp_file.path())).await.unwrap();

        // Only asserts on settings no test environment variable sets.
        if std::env::var("ROUTE_FINDER_OUTPUT_FORMAT").is_err() {
            assert_eq!(loaded.output.format, "markdown");
        }
    }

    #[tokio::test]
    async fn test_load_layered_missing_file_uses_defaults() {
        let loaded = Config::load_layered(Some("/definitely/not/route-finder.yml"))
            .await
            .unwrap();

        if std::env::var("ROUTE_FINDER_EDGES_FILE").is_err() {
            assert_eq!(loaded.graph.edges_file, None);
        }
    }
}
