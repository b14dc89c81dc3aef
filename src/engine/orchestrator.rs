// ==========================================
// 项目组合管理系统 - 报表分析编排器
// ==========================================
// 用途: 协调各分析引擎的执行顺序
// 流程: 阶段解析 → 关键日期 → RAG → 筛选 → (风险分级, 延期) → 汇总 / 月度趋势
// 红线: 不做 I/O,不修改输入记录; today 由调用方显式传入
// ==========================================

use crate::config::AnalyticsConfig;
use crate::domain::project::{DerivedProject, ProjectRecord};
use crate::domain::report::{PortfolioReport, ReportFilter};
use crate::domain::types::Stage;
use crate::engine::aggregation::{AggregationEngine, TeamRole};
use crate::engine::date_utils::days_between;
use crate::engine::delay::DelayCalculator;
use crate::engine::rag::RagClassifier;
use crate::engine::relevant_date::RelevantDateSelector;
use crate::engine::risk_tier::RiskTierClassifier;
use crate::engine::stage::StageResolver;
use crate::engine::trend::MonthlyTrendBuilder;
use chrono::NaiveDate;
use tracing::{debug, instrument};

// ==========================================
// PortfolioAnalyticsEngine - 报表分析编排器
// ==========================================
// 无状态: 同一实例可被并发复用
#[derive(Debug, Clone)]
pub struct PortfolioAnalyticsEngine {
    unassigned_label: String,
    stage_resolver: StageResolver,
    date_selector: RelevantDateSelector,
    rag: RagClassifier,
    risk_tiers: RiskTierClassifier,
    delays: DelayCalculator,
    aggregation: AggregationEngine,
    trends: MonthlyTrendBuilder,
}

impl PortfolioAnalyticsEngine {
    /// 创建编排器
    ///
    /// # 参数
    /// - config: 报表分析配置 (调用方负责校验)
    pub fn new(config: &AnalyticsConfig) -> Self {
        Self {
            unassigned_label: config.unassigned_label.clone(),
            stage_resolver: StageResolver::new(),
            date_selector: RelevantDateSelector::new(),
            rag: RagClassifier::new(config.rag),
            risk_tiers: RiskTierClassifier::new(config.risk_tiers),
            delays: DelayCalculator::new(),
            aggregation: AggregationEngine::new(config),
            trends: MonthlyTrendBuilder::new(),
        }
    }

    // ==========================================
    // 派生项目
    // ==========================================

    /// 单项目派生
    pub fn derive(&self, record: &ProjectRecord, today: NaiveDate) -> DerivedProject {
        let column = self.stage_resolver.resolve(&record.kanban_status);
        let finish_date = self.date_selector.select(column, record);
        let rag_status = self
            .rag
            .classify(finish_date, column == Stage::OnHold, today);
        let days_until_deadline = finish_date.map(|finish| days_between(today, finish));

        DerivedProject {
            record: record.clone(),
            column,
            finish_date,
            rag_status,
            days_until_deadline,
        }
    }

    /// 批量派生 (保持输入顺序)
    #[instrument(skip_all, fields(count = records.len(), today = %today))]
    pub fn derive_all(&self, records: &[ProjectRecord], today: NaiveDate) -> Vec<DerivedProject> {
        records
            .iter()
            .map(|record| self.derive(record, today))
            .collect()
    }

    // ==========================================
    // 筛选
    // ==========================================

    /// 项目是否满足筛选条件
    ///
    /// - 文本条件去首尾空白后精确匹配
    /// - PM/BP 条件等于 unassigned_label 时匹配未分配项目
    pub fn matches_filter(&self, project: &DerivedProject, filter: &ReportFilter) -> bool {
        if let Some(division) = filter.division.as_deref() {
            if project.record.division_name() != Some(division.trim()) {
                return false;
            }
        }

        if let Some(pm) = filter.project_manager.as_deref() {
            if !self.matches_person(project.record.project_manager_name(), pm) {
                return false;
            }
        }

        if let Some(bp) = filter.business_partner.as_deref() {
            if !self.matches_person(project.record.business_partner_name(), bp) {
                return false;
            }
        }

        filter.stages.is_empty() || filter.stages.contains(&project.column)
    }

    fn matches_person(&self, actual: Option<&str>, wanted: &str) -> bool {
        let wanted = wanted.trim();
        match actual {
            Some(name) => name == wanted,
            None => wanted == self.unassigned_label,
        }
    }

    // ==========================================
    // 完整报表
    // ==========================================

    /// 生成报表分析结果
    ///
    /// # 参数
    /// - records: 原始项目记录 (只读)
    /// - today: 本次计算统一使用的日期
    /// - filter: 筛选条件 (所有汇总基于筛选后的集合)
    #[instrument(skip_all, fields(count = records.len(), today = %today))]
    pub fn analyze(
        &self,
        records: &[ProjectRecord],
        today: NaiveDate,
        filter: &ReportFilter,
    ) -> PortfolioReport {
        // ==========================================
        // 步骤1: 派生 (阶段 / 关键日期 / RAG / 剩余天数)
        // ==========================================
        let derived = self.derive_all(records, today);
        let projects: Vec<DerivedProject> = if filter.is_empty() {
            derived
        } else {
            derived
                .into_iter()
                .filter(|project| self.matches_filter(project, filter))
                .collect()
        };

        debug!(
            input_count = records.len(),
            filtered_count = projects.len(),
            "派生与筛选完成"
        );

        // ==========================================
        // 步骤2: 风险分级 / 延期
        // ==========================================
        let risk_tiers = self.risk_tiers.build_breakdown(&projects);
        let projects_with_delays = self.delays.collect_delays(&projects);

        debug!(
            overdue = risk_tiers.overdue.count,
            critical = risk_tiers.critical.count,
            high = risk_tiers.high.count,
            medium = risk_tiers.medium.count,
            low = risk_tiers.low.count,
            delayed = projects_with_delays.len(),
            "风险分级与延期计算完成"
        );

        // ==========================================
        // 步骤3: 汇总统计 / 月度趋势
        // ==========================================
        let kpis = self.aggregation.kpis(&projects);
        let projects_by_kanban = self.aggregation.pipeline(&projects);
        let projects_by_division = self.aggregation.divisions(&projects);
        let pm_summary = self
            .aggregation
            .team_groups(&projects, TeamRole::ProjectManager);
        let bp_summary = self
            .aggregation
            .team_groups(&projects, TeamRole::BusinessPartner);
        let monthly_trends = self.trends.build(projects.iter().map(|p| &p.record));

        debug!(
            total = kpis.total_projects,
            red = kpis.red_count,
            amber = kpis.amber_count,
            green = kpis.green_count,
            months = monthly_trends.len(),
            "汇总统计完成"
        );

        PortfolioReport {
            generated_for: today,
            applied_filter: filter.clone(),
            kpis,
            risk_tiers,
            projects_by_kanban,
            projects_by_division,
            projects_with_delays,
            monthly_trends,
            bp_summary,
            pm_summary,
            projects_with_rag: projects,
        }
    }
}

impl Default for PortfolioAnalyticsEngine {
    fn default() -> Self {
        Self::new(&AnalyticsConfig::default())
    }
}
