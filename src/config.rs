//! Configuration file loading with environment variable overrides.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::Deserialize;

/// Output path used when nothing else is configured.
pub const DEFAULT_OUTPUT: &str = "public/tv-placeholder.png";

/// Font requested when nothing else is configured.
pub const DEFAULT_FONT: &str = "arial.ttf";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Output file settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Font settings.
    #[serde(default)]
    pub font: FontConfig,
}

/// Output file settings.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Destination of the generated PNG.
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { path: DEFAULT_OUTPUT.to_string() }
    }
}

/// Font settings.
#[derive(Debug, Deserialize)]
pub struct FontConfig {
    /// Font file name or path, e.g. `arial.ttf`.
    pub name: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self { name: DEFAULT_FONT.to_string() }
    }
}

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "TV_PLACEHOLDER_CONFIG";
/// Environment variable overriding the output path.
pub const OUTPUT_ENV: &str = "TV_PLACEHOLDER_OUTPUT";
/// Environment variable overriding the font name.
pub const FONT_ENV: &str = "TV_PLACEHOLDER_FONT";

/// Look up a variable in the process environment.
#[must_use]
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

impl Config {
    /// Read the TOML file at `path`. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, String> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .map_err(|e| format!("Failed to parse config {}: {e}", path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(format!("Failed to read config {}: {e}", path.display())),
        }
    }

    /// Output path: `TV_PLACEHOLDER_OUTPUT` if set, else the file value.
    #[must_use]
    pub fn output_path(&self, env: impl Fn(&str) -> Option<String>) -> PathBuf {
        env(OUTPUT_ENV).map_or_else(|| PathBuf::from(&self.output.path), PathBuf::from)
    }

    /// Font name: `TV_PLACEHOLDER_FONT` if set, else the file value.
    #[must_use]
    pub fn font_name(&self, env: impl Fn(&str) -> Option<String>) -> String {
        env(FONT_ENV).unwrap_or_else(|| self.font.name.clone())
    }
}

/// Pick the config file: the `--config` flag, then `TV_PLACEHOLDER_CONFIG`,
/// then `tv-placeholder/config.toml` under the user config directory.
#[must_use]
pub fn discover_config_path(
    explicit: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> PathBuf {
    explicit
        .map(PathBuf::from)
        .or_else(|| env(CONFIG_ENV).map(PathBuf::from))
        .or_else(|| {
            BaseDirs::new().map(|base| base.config_dir().join("tv-placeholder").join("config.toml"))
        })
        .unwrap_or_else(|| PathBuf::from("tv-placeholder.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.output.path, "public/tv-placeholder.png");
        assert_eq!(config.font.name, "arial.ttf");
    }

    #[test]
    fn load_nonexistent_returns_defaults() {
        let config = Config::load(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(config.output.path, DEFAULT_OUTPUT);
        assert_eq!(config.font.name, DEFAULT_FONT);
    }

    #[test]
    fn load_valid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[output]
path = "/srv/www/tv.png"

[font]
name = "DejaVuSans.ttf"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.output.path, "/srv/www/tv.png");
        assert_eq!(config.font.name, "DejaVuSans.ttf");
    }

    #[test]
    fn load_partial_toml_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[font]\nname = \"verdana.ttf\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.font.name, "verdana.ttf");
        assert_eq!(config.output.path, DEFAULT_OUTPUT);
    }

    #[test]
    fn load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        assert!(Config::load(&path).is_err());
    }

    /// Environment with only the given variables set.
    fn env_of(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| vars.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_string())
    }

    #[test]
    fn output_path_from_file() {
        let config = Config {
            output: OutputConfig { path: "from-file.png".into() },
            ..Config::default()
        };
        assert_eq!(config.output_path(env_of(&[])), PathBuf::from("from-file.png"));
    }

    #[test]
    fn env_overrides_file_values() {
        let config = Config::default();
        let env = env_of(&[(OUTPUT_ENV, "/tmp/env.png"), (FONT_ENV, "env.ttf")]);
        assert_eq!(config.output_path(&env), PathBuf::from("/tmp/env.png"));
        assert_eq!(config.font_name(&env), "env.ttf");
    }

    #[test]
    fn discover_explicit_path() {
        let env = env_of(&[(CONFIG_ENV, "/from/env.toml")]);
        let path = discover_config_path(Some("/tmp/my-config.toml"), env);
        assert_eq!(path, PathBuf::from("/tmp/my-config.toml"));
    }

    #[test]
    fn discover_env_path() {
        let path = discover_config_path(None, env_of(&[(CONFIG_ENV, "/from/env.toml")]));
        assert_eq!(path, PathBuf::from("/from/env.toml"));
    }

    #[test]
    fn discover_falls_back_to_user_config_dir() {
        let path = discover_config_path(None, env_of(&[]));
        assert!(path.ends_with("tv-placeholder/config.toml") || path.ends_with("tv-placeholder.toml"));
    }
}
