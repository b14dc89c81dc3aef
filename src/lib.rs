// ==========================================
// 项目组合管理系统 - 核心库
// ==========================================
// 职责: 项目组合报表分析与风险分级
// 技术栈: Rust + serde + chrono + tracing
// 系统定位: 报表引擎 (展示层负责渲染)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 分析规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 阈值配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 报表接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{RagLabel, RiskTier, Stage};

// 领域实体
pub use domain::{
    DateRange, DelayedProject, DerivedProject, MonthlyTrend, PortfolioReport, ProjectRecord,
    RagStatus, ReportFilter, RiskTierBreakdown,
};

// 引擎
pub use engine::{
    AggregationEngine, DelayCalculator, MonthlyTrendBuilder, PortfolioAnalyticsEngine,
    RagClassifier, RiskTierClassifier, StageResolver,
};

// 配置
pub use config::{AnalyticsConfig, ConfigManager};

// API
pub use api::{ApiError, ApiResult, ReportingApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "项目组合管理系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
