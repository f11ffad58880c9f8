use anyhow::Result;
use noel_luxe_greeting::GreetingConfig;
use noel_luxe_layout::SceneParams;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config/scene.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Tree, garland and star shape plus the randomness source.
    pub scene: SceneParams,
    /// Text-generation endpoint settings.
    pub greeting: GreetingConfig,
}

impl AppConfig {
    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    AppConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_CONFIG_PATH)
                    || err.kind() != std::io::ErrorKind::NotFound
                {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                AppConfig::default()
            }
        }
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noel_luxe_layout::SceneSeed;
    use tempfile::tempdir;

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        fs::write(
            &path,
            "[scene.tree]\nlayer_count = 12\n\n[greeting]\nmodel = \"gemini-test\"\n",
        )
        .expect("write config");

        let cfg = AppConfig::load_from_path(&path);
        assert_eq!(cfg.scene.tree.layer_count, 12);
        assert_eq!(cfg.scene.tree.height, 5.2);
        assert_eq!(cfg.scene.garland.point_count, 180);
        assert_eq!(cfg.greeting.model, "gemini-test");
        assert_eq!(cfg.greeting.api_key_env, "API_KEY");
        assert_eq!(cfg.greeting.sampling.top_k, 40);
    }

    #[test]
    fn fixed_seed_parses() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seed.toml");
        fs::write(&path, "[scene]\nseed = { fixed = 42 }\n").expect("write config");
        assert_eq!(
            AppConfig::load_from_path(&path).scene.seed,
            SceneSeed::Fixed(42)
        );
    }

    #[test]
    fn timeout_is_unset_unless_configured() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("timeout.toml");
        assert_eq!(AppConfig::load_from_path(&path).greeting.timeout_secs, None);

        fs::write(&path, "[greeting]\ntimeout_secs = 5\n").expect("write config");
        assert_eq!(AppConfig::load_from_path(&path).greeting.timeout_secs, Some(5));

        AppConfig::default().save_to_path(&path).expect("save config");
        let saved = fs::read_to_string(&path).expect("read config");
        assert!(!saved.contains("timeout_secs"));
    }

    #[test]
    fn unparsable_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "this is = = not toml").expect("write config");
        assert_eq!(AppConfig::load_from_path(&path), AppConfig::default());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert_eq!(AppConfig::load_from_path(&path), AppConfig::default());
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved.toml");
        let mut cfg = AppConfig::default();
        cfg.scene.tree.layer_count = 9;
        cfg.scene.seed = SceneSeed::Fixed(5);
        cfg.greeting.timeout_secs = Some(12);
        cfg.save_to_path(&path).expect("save config");
        assert_eq!(AppConfig::load_from_path(&path), cfg);
    }
}
