use crate::error::{CodelistError, Result};
use codelist_common::stock::parse_minimum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 識別モードの入力確定までの待ち時間（ミリ秒）
    pub debounce_ms: u64,
    /// 在庫判定の最低在庫数（未指定時）
    pub default_minimum: String,
    /// --export 省略時の出力先
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: 400,
            default_minimum: "1".into(),
            export_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            tracing::debug!(path = %config_path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CodelistError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("codelist").join("config.json"))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn set_debounce_ms(&mut self, ms: u64) -> Result<()> {
        if ms == 0 {
            return Err(CodelistError::Config("待ち時間は1ミリ秒以上を指定してください".into()));
        }
        self.debounce_ms = ms;
        Ok(())
    }

    /// 整数として読めない値は保存しない
    pub fn set_default_minimum(&mut self, minimum: String) -> Result<()> {
        if parse_minimum(&minimum).is_none() {
            return Err(CodelistError::Config(format!(
                "最低在庫数が整数ではありません: {}",
                minimum
            )));
        }
        self.default_minimum = minimum;
        Ok(())
    }

    pub fn set_export_dir(&mut self, dir: PathBuf) {
        self.export_dir = Some(dir);
    }
}
