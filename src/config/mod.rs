use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::Result;

const TMP_SUFFIX: &str = "tmp";
const DEFAULT_FILE_PREFIX: &str = "relatorio_gastos";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the monthly workbooks and chart files.
    pub output_dir: String,
    /// File-name prefix of the monthly workbook.
    pub file_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: ".".into(),
            file_prefix: DEFAULT_FILE_PREFIX.into(),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Manager over the default config file in the working directory.
    pub fn new() -> Self {
        Self::with_path("gastos_config.json")
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the config, falling back to defaults when the file is absent.
    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_path(temp.path().join("gastos_config.json"));
        let config = manager.load().expect("load defaults");
        assert_eq!(config.output_dir, ".");
        assert_eq!(config.file_prefix, "relatorio_gastos");
    }

    #[test]
    fn save_and_load_roundtrip() {
        let temp = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_path(temp.path().join("gastos_config.json"));
        let config = Config {
            output_dir: "/tmp/reports".into(),
            file_prefix: "familia".into(),
        };
        manager.save(&config).expect("save config");
        let loaded = manager.load().expect("reload config");
        assert_eq!(loaded.file_prefix, "familia");
        assert_eq!(loaded.output_dir, "/tmp/reports");
    }
}
