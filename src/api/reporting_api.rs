// ==========================================
// 项目组合管理系统 - 报表 API
// ==========================================
// 职责: 读取项目列表 → 调用分析引擎 → 返回报表结果
// 架构: API 层 → Importer (ProjectSource) + Engine (PortfolioAnalyticsEngine)
// 说明: today 在此层读取一次,引擎内部不读取系统时钟
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::AnalyticsConfig;
use crate::domain::project::{DelayedProject, DerivedProject, ProjectRecord};
use crate::domain::report::{MonthlyTrend, PortfolioReport, ReportFilter};
use crate::engine::date_utils::local_today;
use crate::engine::PortfolioAnalyticsEngine;
use crate::importer::ProjectSource;
use chrono::NaiveDate;
use std::sync::Arc;

// ==========================================
// ReportingApi - 报表 API
// ==========================================
pub struct ReportingApi {
    /// 项目数据源 (持久化协作方)
    source: Arc<dyn ProjectSource>,
    /// 分析引擎
    engine: PortfolioAnalyticsEngine,
}

impl ReportingApi {
    /// 创建新的ReportingApi实例
    ///
    /// # 参数
    /// - source: 项目数据源
    /// - config: 报表分析配置 (会先校验)
    pub fn new(source: Arc<dyn ProjectSource>, config: &AnalyticsConfig) -> ApiResult<Self> {
        config.validate()?;
        Ok(Self {
            source,
            engine: PortfolioAnalyticsEngine::new(config),
        })
    }

    fn load(&self) -> ApiResult<Vec<ProjectRecord>> {
        let records = self.source.load_projects()?;
        tracing::info!(
            source = %self.source.describe(),
            count = records.len(),
            "项目列表已加载"
        );
        Ok(records)
    }

    fn resolve_today(today: Option<NaiveDate>) -> NaiveDate {
        today.unwrap_or_else(local_today)
    }

    // ==========================================
    // 报表查询接口
    // ==========================================

    /// 生成完整报表
    ///
    /// # 参数
    /// - filter: 筛选条件
    /// - today: 计算日期,None 时使用本地今天
    ///
    /// # 返回
    /// - Ok(PortfolioReport): 报表结果 (可能为空集)
    /// - Err(ApiError): 筛选条件非法 / 数据源错误
    pub fn build_report(
        &self,
        filter: &ReportFilter,
        today: Option<NaiveDate>,
    ) -> ApiResult<PortfolioReport> {
        Self::validate_filter(filter)?;

        let records = self.load()?;
        let today = Self::resolve_today(today);
        let report = self.engine.analyze(&records, today, filter);

        tracing::info!(
            today = %today,
            total = report.kpis.total_projects,
            red = report.kpis.red_count,
            delayed = report.projects_with_delays.len(),
            "报表已生成"
        );
        Ok(report)
    }

    /// 派生项目列表 (含 RAG / 剩余天数)
    pub fn classify_projects(&self, today: Option<NaiveDate>) -> ApiResult<Vec<DerivedProject>> {
        let records = self.load()?;
        Ok(self.engine.derive_all(&records, Self::resolve_today(today)))
    }

    /// 延期项目列表 (按延期天数降序)
    pub fn list_delays(&self, today: Option<NaiveDate>) -> ApiResult<Vec<DelayedProject>> {
        Ok(self
            .build_report(&ReportFilter::default(), today)?
            .projects_with_delays)
    }

    /// 月度趋势 (与 today 无关)
    pub fn monthly_trends(&self) -> ApiResult<Vec<MonthlyTrend>> {
        let records = self.load()?;
        Ok(crate::engine::MonthlyTrendBuilder::new().build(&records))
    }

    // ==========================================
    // 输入校验
    // ==========================================

    /// 筛选条件校验: 给出但为空白的文本条件视为非法
    fn validate_filter(filter: &ReportFilter) -> ApiResult<()> {
        let fields = [
            ("division", &filter.division),
            ("projectManager", &filter.project_manager),
            ("businessPartner", &filter.business_partner),
        ];

        for (name, value) in fields {
            if let Some(v) = value {
                if v.trim().is_empty() {
                    return Err(ApiError::InvalidInput(format!("筛选条件 {} 不能为空", name)));
                }
            }
        }

        Ok(())
    }
}
