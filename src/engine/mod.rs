// ==========================================
// 项目组合管理系统 - 引擎层
// ==========================================
// 职责: 报表分析与风险分级规则
// 红线: 纯计算,不做 I/O,不修改输入记录
// ==========================================

pub mod aggregation;
pub mod date_utils;
pub mod delay;
pub mod orchestrator;
pub mod rag;
pub mod relevant_date;
pub mod risk_tier;
pub mod stage;
pub mod trend;

// 重导出核心引擎
pub use aggregation::{AggregationEngine, TeamRole};
pub use delay::DelayCalculator;
pub use orchestrator::PortfolioAnalyticsEngine;
pub use rag::RagClassifier;
pub use relevant_date::RelevantDateSelector;
pub use risk_tier::RiskTierClassifier;
pub use stage::{StageResolver, DEFAULT_STAGE};
pub use trend::MonthlyTrendBuilder;
