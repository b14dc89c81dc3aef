// ==========================================
// 项目组合管理系统 - RAG 健康度判定
// ==========================================
// 职责: 截止日期 + 暂停标志 → Red / Amber / Green
// 红线: 纯函数; 同一次报表计算使用同一个 today
// ==========================================

use crate::config::RagThresholds;
use crate::domain::project::RagStatus;
use crate::domain::types::RagLabel;
use crate::engine::date_utils::days_between;
use chrono::NaiveDate;

// ==========================================
// RagClassifier - RAG 判定器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct RagClassifier {
    thresholds: RagThresholds,
}

impl RagClassifier {
    pub fn new(thresholds: RagThresholds) -> Self {
        Self { thresholds }
    }

    /// 判定 RAG (含展示元数据)
    pub fn classify(
        &self,
        finish_date: Option<NaiveDate>,
        is_on_hold: bool,
        today: NaiveDate,
    ) -> RagStatus {
        RagStatus::for_label(self.classify_label(finish_date, is_on_hold, today))
    }

    /// 判定 RAG 标签
    ///
    /// 规则（顺序执行，命中即返回）:
    /// 1) 暂停 → Amber (忽略日期)
    /// 2) 无截止日期 → missing_finish_label (默认 Green)
    /// 3) diff < 0 → Red
    /// 4) 0 <= diff <= amber_window_days → Amber
    /// 5) 其他 → Green
    pub fn classify_label(
        &self,
        finish_date: Option<NaiveDate>,
        is_on_hold: bool,
        today: NaiveDate,
    ) -> RagLabel {
        if is_on_hold {
            return RagLabel::Amber;
        }

        let finish = match finish_date {
            Some(date) => date,
            None => return self.thresholds.missing_finish_label,
        };

        let diff_days = days_between(today, finish);
        if diff_days < 0 {
            RagLabel::Red
        } else if diff_days <= self.thresholds.amber_window_days {
            RagLabel::Amber
        } else {
            RagLabel::Green
        }
    }
}
