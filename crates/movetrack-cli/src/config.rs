use anyhow::{Context, Result, bail};
use movetrack_core::{
    Assigner, DEFAULT_IMPORT_ACTOR, SystemClock, TimestampIdSource, UuidIdSource,
    ValidationPolicy,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. MOVETRACK_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.movetrack/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var("MOVETRACK_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("movetrack").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".movetrack").join("config.toml"));
    }

    bail!("Could not determine config path: no HOME directory or XDG config directory found")
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// How new movement ids are generated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdStrategy {
    #[default]
    Uuid,
    /// `<unix millis>-<counter>`, sortable by creation time
    Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Session identity for `add` when neither --actor nor MOVETRACK_ACTOR is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    /// executedBy for imported rows without their own value
    #[serde(default = "default_import_actor")]
    pub import_actor: String,

    #[serde(default)]
    pub validation: ValidationPolicy,

    #[serde(default)]
    pub id_strategy: IdStrategy,
}

/// Blank candidates are skipped so a later source can still supply the actor
fn first_usable_actor<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|actor| !actor.trim().is_empty())
}

fn default_import_actor() -> String {
    DEFAULT_IMPORT_ACTOR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            actor: None,
            import_actor: default_import_actor(),
            validation: ValidationPolicy::default(),
            id_strategy: IdStrategy::default(),
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let config_path = resolve_config_path(explicit_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Session actor: explicit flag, then MOVETRACK_ACTOR, then config
    pub fn resolve_actor(&self, explicit: Option<&str>) -> Option<String> {
        first_usable_actor([
            explicit.map(str::to_string),
            std::env::var("MOVETRACK_ACTOR").ok(),
            self.actor.clone(),
        ])
    }

    pub fn assigner(&self) -> Assigner {
        let assigner = match self.id_strategy {
            IdStrategy::Uuid => Assigner::new(UuidIdSource, SystemClock),
            IdStrategy::Timestamp => Assigner::new(TimestampIdSource::new(), SystemClock),
        };
        assigner.with_import_actor(self.import_actor.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.import_actor, "CSV Import");
        assert_eq!(config.validation, ValidationPolicy::Permissive);
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
        assert!(config.actor.is_none());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            actor: Some("jane.smith@example.com".to_string()),
            import_actor: "Nightly Sync".to_string(),
            validation: ValidationPolicy::RequireFields,
            id_strategy: IdStrategy::Timestamp,
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "validation = \"require-fields\"\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.validation, ValidationPolicy::RequireFields);
        assert_eq!(config.import_actor, "CSV Import");

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_explicit_actor_wins() {
        let config = Config {
            actor: Some("from-config".to_string()),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_actor(Some("from-flag")).as_deref(),
            Some("from-flag")
        );
    }

    #[test]
    fn test_blank_actor_falls_through() {
        assert_eq!(
            first_usable_actor([Some("  ".to_string()), None, Some("from-config".to_string())])
                .as_deref(),
            Some("from-config")
        );
        assert_eq!(
            first_usable_actor([None, Some(String::new()), Some("from-config".to_string())])
                .as_deref(),
            Some("from-config")
        );
        assert_eq!(
            first_usable_actor([Some(" ".to_string()), Some(String::new()), None]),
            None
        );
    }
}
