// ==========================================
// 项目记录构建器 - 用于集成测试
// ==========================================

use chrono::NaiveDate;
use portfolio_analytics::domain::project::{DateRange, ProjectRecord};

/// 构造日期 (测试用)
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ==========================================
// ProjectRecord 构建器
// ==========================================

pub struct ProjectBuilder {
    record: ProjectRecord,
}

impl ProjectBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            record: ProjectRecord {
                name: name.to_string(),
                kanban_status: "backlog".to_string(),
                ..ProjectRecord::default()
            },
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.record.id = Some(id.to_string());
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.record.kanban_status = status.to_string();
        self
    }

    pub fn division(mut self, division: &str) -> Self {
        self.record.division = Some(division.to_string());
        self
    }

    pub fn pm(mut self, pm: &str) -> Self {
        self.record.project_manager = Some(pm.to_string());
        self
    }

    pub fn bp(mut self, bp: &str) -> Self {
        self.record.business_partner = Some(bp.to_string());
        self
    }

    pub fn psd_finish(mut self, finish: NaiveDate) -> Self {
        self.record.psd.finish = Some(finish);
        self
    }

    pub fn investment_finish(mut self, finish: NaiveDate) -> Self {
        self.record.investment.finish = Some(finish);
        self
    }

    pub fn procurement_finish(mut self, finish: NaiveDate) -> Self {
        self.record.procurement.finish = Some(finish);
        self
    }

    pub fn implementation(mut self, start: Option<NaiveDate>, finish: Option<NaiveDate>) -> Self {
        self.record.implementation = DateRange::new(start, finish);
        self
    }

    pub fn implementation_finish(mut self, finish: NaiveDate) -> Self {
        self.record.implementation.finish = Some(finish);
        self
    }

    /// 计划基线完成日期
    pub fn planned_finish(mut self, finish: NaiveDate) -> Self {
        self.record.actual_dates.finish = Some(finish);
        self
    }

    pub fn build(self) -> ProjectRecord {
        self.record
    }
}
