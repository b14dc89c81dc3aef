// ==========================================
// 项目组合管理系统 - 配置管理器
// ==========================================
// 职责: 配置加载、校验、快照导出
// 存储: JSON 文件 (默认 <config_dir>/portfolio-analytics/config.json)
// ==========================================

use crate::config::analytics_config::AnalyticsConfig;
use crate::config::error::{ConfigError, ConfigResult};
use std::fs;
use std::path::{Path, PathBuf};

/// 指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "PORTFOLIO_ANALYTICS_CONFIG";

/// 默认配置目录名
const CONFIG_DIR_NAME: &str = "portfolio-analytics";

/// 默认配置文件名
const CONFIG_FILE_NAME: &str = "config.json";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager;

impl ConfigManager {
    /// 默认配置文件路径
    ///
    /// # 返回
    /// - Some(PathBuf): 用户配置目录下的 config.json
    /// - None: 当前平台无用户配置目录
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// 从指定文件加载配置并校验
    ///
    /// # 参数
    /// - path: 配置文件路径 (必须存在)
    pub fn load(path: &Path) -> ConfigResult<AnalyticsConfig> {
        let path_str = path.display().to_string();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path_str));
        }

        let raw = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        let config: AnalyticsConfig =
            serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        config.validate()?;

        tracing::debug!(path = %path_str, "已加载报表分析配置");
        Ok(config)
    }

    /// 加载配置,缺省时使用默认值
    ///
    /// # 逻辑
    /// 1. 显式路径: 必须存在,否则报错
    /// 2. 默认路径存在: 加载
    /// 3. 其他: 返回 AnalyticsConfig::default()
    pub fn load_or_default(explicit: Option<&Path>) -> ConfigResult<AnalyticsConfig> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                tracing::info!("未找到配置文件,使用默认配置");
                Ok(AnalyticsConfig::default())
            }
        }
    }

    /// 导出配置快照 (JSON)
    ///
    /// # 用途
    /// - 报表结果归档时记录当次阈值
    pub fn snapshot(config: &AnalyticsConfig) -> ConfigResult<String> {
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::ParseError {
            path: "<snapshot>".to_string(),
            message: e.to_string(),
        })
    }

    /// 保存配置到文件 (先校验,自动创建父目录)
    pub fn save(config: &AnalyticsConfig, path: &Path) -> ConfigResult<()> {
        config.validate()?;

        let display = path.display().to_string();
        let write_err = |e: std::io::Error| ConfigError::WriteError {
            path: display.clone(),
            message: e.to_string(),
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let json = Self::snapshot(config)?;
        fs::write(path, json).map_err(write_err)?;
        Ok(())
    }
}
