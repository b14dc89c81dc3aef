// ==========================================
// 项目组合管理系统 - 配置层
// ==========================================
// 职责: 报表分析阈值与分组参数管理
// 存储: JSON 配置文件
// ==========================================

pub mod analytics_config;
pub mod config_manager;
pub mod error;

// 重导出核心配置
pub use analytics_config::{
    AnalyticsConfig, DayWindow, RagThresholds, RiskTierThresholds, DEFAULT_AMBER_WINDOW_DAYS,
    DEFAULT_TOP_DIVISIONS_LIMIT, MISSING_FINISH_DATE_LABEL, UNASSIGNED_LABEL,
};
pub use config_manager::{ConfigManager, CONFIG_PATH_ENV};
pub use error::{ConfigError, ConfigResult};
