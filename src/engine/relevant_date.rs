// ==========================================
// 项目组合管理系统 - 关键日期选择器
// ==========================================
// 职责: 按阶段选择决定 RAG 的截止日期
// 规则: 显式映射表,不做字段名拼接
// ==========================================

use crate::domain::project::ProjectRecord;
use crate::domain::types::Stage;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, Default)]
pub struct RelevantDateSelector;

impl RelevantDateSelector {
    pub fn new() -> Self {
        Self
    }

    /// 选择关键截止日期
    ///
    /// | 阶段 | 日期来源 |
    /// |---|---|
    /// | backlog / psdpre / psdready | psd.finish |
    /// | invapproved | investment.finish |
    /// | procurement | procurement.finish |
    /// | implementation / uat | implementation.finish |
    /// | onhold / done | 无 |
    pub fn select(&self, column: Stage, record: &ProjectRecord) -> Option<NaiveDate> {
        match column {
            Stage::Backlog | Stage::PsdPre | Stage::PsdReady => record.psd.finish,
            Stage::InvApproved => record.investment.finish,
            Stage::Procurement => record.procurement.finish,
            Stage::Implementation | Stage::Uat => record.implementation.finish,
            Stage::OnHold | Stage::Done => None,
        }
    }
}
