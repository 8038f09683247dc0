//! アプリケーション設定管理モジュール
//!
//! XDGディレクトリを使用した設定ファイルの永続化と管理を提供します。

use crate::chat_management::Tier;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 分析設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// 既定の契約プラン（未知の値は Starter 扱い）
    pub default_tier: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_tier: Tier::Starter.as_str().to_string(),
        }
    }
}

impl AnalysisConfig {
    pub fn tier(&self) -> Tier {
        Tier::parse_lenient(&self.default_tier)
    }
}

/// レポート出力設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// JSONを整形して出力するか
    pub pretty_json: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

/// ログ設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// カスタムログディレクトリ（Noneの場合はXDGデフォルト使用）
    pub log_dir: Option<PathBuf>,
    /// ログレベル (trace/debug/info/warn/error)
    pub log_level: String,
    /// ファイル出力有効化
    pub enable_file_logging: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            log_level: "info".to_string(),
            enable_file_logging: false,
        }
    }
}

/// アプリケーション設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// 設定マネージャー
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// XDGディレクトリの既定パスを使う設定マネージャーを作成
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: Self::default_config_path()?,
        })
    }

    /// 任意のパスを使う設定マネージャーを作成
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
        }
    }

    /// XDGディレクトリに基づく設定ファイルパスを取得
    pub fn default_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("dev", "chatpulse", "chatpulse")
            .context("Failed to get project directories")?;

        let config_file = project_dirs.config_dir().join("config.toml");
        debug!("Config file path: {}", config_file.display());

        Ok(config_file)
    }

    /// XDGディレクトリに基づく既定のログディレクトリ
    pub fn default_log_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "chatpulse", "chatpulse")
            .map(|dirs| dirs.data_local_dir().join("logs"))
    }

    /// 設定を読み込み（ファイルがなければ既定値）
    pub fn load_config(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            info!(
                "Config file not found, using default settings: {}",
                self.config_path.display()
            );
            return Ok(AppConfig::default());
        }

        let config_content = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config: AppConfig = toml::from_str(&config_content).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        info!(
            "✅ Configuration loaded from: {}",
            self.config_path.display()
        );

        Ok(config)
    }

    /// 設定を保存
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let config_content =
            toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, config_content).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        info!("💾 Configuration saved to: {}", self.config_path.display());

        Ok(())
    }

    /// 設定ファイルパスを取得
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.analysis.tier(), Tier::Starter);
        assert!(config.report.pretty_json);
        assert_eq!(config.log.log_level, "info");
        assert!(!config.log.enable_file_logging);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("missing.toml"));
        assert_eq!(manager.load_config().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("nested/config.toml"));

        let mut config = AppConfig::default();
        config.analysis.default_tier = "Agency".to_string();
        config.report.pretty_json = false;
        config.log.log_level = "debug".to_string();

        manager.save_config(&config).unwrap();
        let loaded = manager.load_config().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.analysis.tier(), Tier::Agency);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[analysis]\ndefault_tier = \"pro\"\n").unwrap();

        let config = ConfigManager::with_path(&path).load_config().unwrap();
        assert_eq!(config.analysis.tier(), Tier::Pro);
        assert!(config.report.pretty_json);
        assert_eq!(config.log.log_level, "info");
    }

    #[test]
    fn test_unknown_tier_falls_back() {
        let config = AnalysisConfig {
            default_tier: "enterprise".to_string(),
        };
        assert_eq!(config.tier(), Tier::Starter);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[analysis\n").unwrap();

        let error = ConfigManager::with_path(&path).load_config().unwrap_err();
        assert!(error.to_string().contains("Failed to parse config file"));
    }
}
