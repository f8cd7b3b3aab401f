//! User configuration, read from TOML.

use crate::error::{Error, Result};
use crate::pipeline::{ExportOptions, OutputFormat};
use crate::texture::DEFAULT_SIZE;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub render: RenderConfig,
    pub assets: AssetsConfig,
    pub textures: TexturesConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RenderConfig {
    pub scale: f64,
    pub format: OutputFormat,
    pub quality: u8,
    pub thumbnail_scale: f64,
    pub pattern: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let export = ExportOptions::default();
        Self {
            scale: export.scale,
            format: export.format,
            quality: export.quality,
            thumbnail_scale: ExportOptions::thumbnail().scale,
            pattern: String::from("{player}-{template}-{face}"),
        }
    }
}

impl RenderConfig {
    pub fn export(&self) -> ExportOptions {
        ExportOptions {
            scale: self.scale,
            format: self.format,
            quality: self.quality,
        }
    }

    pub fn thumbnail(&self) -> ExportOptions {
        ExportOptions {
            scale: self.thumbnail_scale,
            ..ExportOptions::thumbnail()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetsConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TexturesConfig {
    pub size: u32,
    pub seed: Option<u64>,
}

impl Default for TexturesConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub Level);

impl Default for LogLevel {
    fn default() -> Self {
        Self(Level::INFO)
    }
}

struct LogLevelVisitor;

impl<'de> Visitor<'de> for LogLevelVisitor {
    type Value = LogLevel;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("one of `error`, `warn`, `info`, `debug` or `trace`")
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse::<Level>().map(LogLevel).map_err(|e| E::custom(e))
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(LogLevelVisitor)
    }
}

impl Config {
    const FILE_NAME: &'static str = "cardforge.toml";

    /// Looks for the configuration file: the explicit path, then the current
    /// folder, then the user folder. Returns the folder relative paths are
    /// resolved against, and the defaults when no file exists.
    pub fn find(path: Option<&Path>) -> Result<(PathBuf, Self)> {
        if let Some(path) = path {
            return Self::open(path);
        }
        let local = PathBuf::from(".").join(Self::FILE_NAME);
        if local.is_file() {
            return Self::open(&local);
        }
        if let Ok(folder) = Self::config_folder() {
            let user = folder.join("config.toml");
            if user.is_file() {
                return Self::open(&user);
            }
        }
        Ok((PathBuf::from("."), Self::default()))
    }

    pub fn open(path: impl AsRef<Path>) -> Result<(PathBuf, Self)> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::open_config(path, e))?;
        let config: Self = toml::from_str(&content).map_err(|e| Error::open_config(path, e))?;
        let folder = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok((folder, config))
    }

    #[cfg(target_os = "windows")]
    fn config_folder() -> Result<PathBuf> {
        let home = std::env::var("APPDATA").map_err(|_| Error::MissingVariable("APPDATA"))?;
        let mut home = PathBuf::from(home);
        home.push("cardforge");
        Ok(home)
    }

    #[cfg(not(target_os = "windows"))]
    fn config_folder() -> Result<PathBuf> {
        let home = std::env::var("HOME").map_err(|_| Error::MissingVariable("HOME"))?;
        let mut home = PathBuf::from(home);
        home.push(".config");
        home.push("cardforge");
        Ok(home)
    }

    pub fn assets_folder(&self, folder: &Path) -> PathBuf {
        match &self.assets.path {
            Some(p) => folder.join(p),
            None => folder.join("assets"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.render.scale, 2.0);
        assert_eq!(config.render.format, OutputFormat::Png);
        assert_eq!(config.render.thumbnail_scale, 0.5);
        assert_eq!(config.render.pattern, "{player}-{template}-{face}");
        assert_eq!(config.textures.size, DEFAULT_SIZE);
        assert_eq!(config.log.level, LogLevel(Level::INFO));
    }

    #[test]
    fn reads_every_section() {
        let config: Config = toml::from_str(
            r#"
            [render]
            scale = 1.0
            format = "jpg"
            quality = 90
            thumbnail-scale = 0.25
            pattern = "{player}_{face}"

            [assets]
            path = "static"

            [textures]
            size = 256
            seed = 7

            [log]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.render.export().format, OutputFormat::Jpeg);
        assert_eq!(config.render.export().quality, 90);
        assert_eq!(config.render.thumbnail().scale, 0.25);
        assert_eq!(config.render.thumbnail().format, OutputFormat::Jpeg);
        assert_eq!(config.textures.seed, Some(7));
        assert_eq!(config.log.level, LogLevel(Level::DEBUG));
        assert_eq!(
            config.assets_folder(Path::new("/cfg")),
            PathBuf::from("/cfg/static")
        );
    }

    #[test]
    fn rejects_bad_log_level() {
        assert!(toml::from_str::<Config>("[log]\nlevel = \"loud\"").is_err());
    }

    #[test]
    fn open_resolves_folder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cardforge.toml");
        fs::write(&path, "[textures]\nsize = 128\n").unwrap();
        let (folder, config) = Config::open(&path).unwrap();
        assert_eq!(folder, dir.path());
        assert_eq!(config.textures.size, 128);
        assert!(matches!(
            Config::open(dir.path().join("missing.toml")),
            Err(Error::FailedOpenConfig(..))
        ));
    }
}
