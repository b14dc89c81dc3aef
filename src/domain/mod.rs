// ==========================================
// 项目组合管理系统 - 领域模型层
// ==========================================
// 职责: 定义项目记录、派生项目、报表结果与领域类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod date_field;
pub mod project;
pub mod report;
pub mod risk;
pub mod types;

// 重导出核心类型
pub use project::{DateRange, DelayedProject, DerivedProject, ProjectRecord, RagStatus};
pub use report::{
    DivisionCount, DivisionSummary, KanbanBucket, KpiSummary, MonthlyTrend, PortfolioReport,
    ReportFilter, TeamGroup,
};
pub use risk::{RiskTierBreakdown, RiskTierBucket, RiskTierSet};
pub use types::{RagLabel, RiskTier, Stage};
