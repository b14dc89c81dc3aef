// ==========================================
// 项目组合管理系统 - 报表结果领域模型
// ==========================================
// 依据: 报表模块 - 仪表盘 KPI / 看板分布 / 团队 / 趋势
// ==========================================
// 用途: 展示层只读数据源,每次调用重新计算,不持久化
// ==========================================

use crate::domain::project::{DelayedProject, DerivedProject};
use crate::domain::risk::RiskTierBreakdown;
use crate::domain::types::Stage;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// KpiSummary - 顶部 KPI 卡片
// ==========================================
// 百分比 = round(count / total * 100), total 为 0 时为 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total_projects: usize,
    pub red_count: usize,
    pub red_percentage: u32,
    pub amber_count: usize,
    pub amber_percentage: u32,
    pub green_count: usize,
    pub green_percentage: u32,
    pub on_hold_count: usize,
    pub on_hold_percentage: u32,
    pub completed_count: usize,
    pub completed_percentage: u32,
}

/// 事业部计数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionCount {
    pub division: String,
    pub count: usize,
}

// ==========================================
// KanbanBucket - 看板阶段分布
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanBucket {
    pub status: String,                  // 阶段显示名称
    pub count: usize,
    pub column_key: Stage,
    pub top_divisions: Vec<DivisionCount>,
    pub all_divisions: Vec<DivisionCount>,
}

// ==========================================
// DivisionSummary - 事业部分布 (含 RAG 拆分)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionSummary {
    pub division: String,
    pub count: usize,
    pub red_count: usize,
    pub amber_count: usize,
    pub green_count: usize,
}

// ==========================================
// TeamGroup - PM / BP 分组
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamGroup {
    pub name: String,
    pub projects: Vec<DerivedProject>,
    pub count: usize,
}

// ==========================================
// MonthlyTrend - 月度趋势
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    pub month: String, // YYYY-MM
    pub started: usize,
    pub completed: usize,
    pub in_progress: usize,
}

// ==========================================
// ReportFilter - 报表筛选条件
// ==========================================
// 空条件 = 全部项目
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilter {
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub project_manager: Option<String>,
    #[serde(default)]
    pub business_partner: Option<String>,
    #[serde(default)]
    pub stages: Vec<Stage>,
}

impl ReportFilter {
    pub fn is_empty(&self) -> bool {
        self.division.is_none()
            && self.project_manager.is_none()
            && self.business_partner.is_none()
            && self.stages.is_empty()
    }
}

// ==========================================
// PortfolioReport - 报表分析结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    pub generated_for: NaiveDate,        // 本次计算使用的 today
    pub applied_filter: ReportFilter,

    // ===== KPI =====
    #[serde(flatten)]
    pub kpis: KpiSummary,

    // ===== 风险卡片 =====
    pub risk_tiers: RiskTierBreakdown,

    // ===== 分布 =====
    pub projects_by_kanban: Vec<KanbanBucket>,
    pub projects_by_division: Vec<DivisionSummary>,

    // ===== 进度 =====
    pub projects_with_delays: Vec<DelayedProject>,
    pub monthly_trends: Vec<MonthlyTrend>,

    // ===== 团队 =====
    pub bp_summary: Vec<TeamGroup>,
    pub pm_summary: Vec<TeamGroup>,

    // ===== 明细 =====
    #[serde(rename = "projectsWithRAG")]
    pub projects_with_rag: Vec<DerivedProject>,
}

impl PortfolioReport {
    /// 按阶段查找看板分布
    pub fn kanban_bucket(&self, stage: Stage) -> Option<&KanbanBucket> {
        self.projects_by_kanban
            .iter()
            .find(|bucket| bucket.column_key == stage)
    }

    /// 按名称查找 PM 分组
    pub fn pm_group(&self, name: &str) -> Option<&TeamGroup> {
        self.pm_summary.iter().find(|group| group.name == name)
    }

    /// 按名称查找 BP 分组
    pub fn bp_group(&self, name: &str) -> Option<&TeamGroup> {
        self.bp_summary.iter().find(|group| group.name == name)
    }
}
