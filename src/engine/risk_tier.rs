// ==========================================
// 项目组合管理系统 - 风险分级判定
// ==========================================
// 职责: 按距截止天数把项目归入 Overdue/Critical/High/Medium/Low
// 注意: 各分级独立判定,允许重叠 (High/Medium 在 10..=14 重叠)
// ==========================================

use crate::config::RiskTierThresholds;
use crate::domain::project::DerivedProject;
use crate::domain::risk::{RiskTierBreakdown, RiskTierSet};
use crate::domain::types::{RiskTier, Stage};

// ==========================================
// RiskTierClassifier - 风险分级判定器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskTierClassifier {
    thresholds: RiskTierThresholds,
}

impl RiskTierClassifier {
    pub fn new(thresholds: RiskTierThresholds) -> Self {
        Self { thresholds }
    }

    /// 单项目风险分级
    ///
    /// 规则:
    /// - Overdue: days < 0,且非 onhold/done
    /// - Critical: days ∈ critical,且非 onhold/done
    /// - High: days ∈ high,且非 onhold/done
    /// - Medium: days ∈ medium,且非 onhold/done
    /// - Low: onhold,或 (days ∈ low 且非 done)
    pub fn classify(&self, project: &DerivedProject) -> RiskTierSet {
        self.classify_parts(project.column, project.days_until_deadline)
    }

    pub fn classify_parts(&self, column: Stage, days_until_deadline: Option<i64>) -> RiskTierSet {
        let live_days = if column.is_parked() {
            None
        } else {
            days_until_deadline
        };

        let t = &self.thresholds;
        RiskTierSet {
            overdue: live_days.is_some_and(|d| d < 0),
            critical: live_days.is_some_and(|d| t.critical.contains(d)),
            high: live_days.is_some_and(|d| t.high.contains(d)),
            medium: live_days.is_some_and(|d| t.medium.contains(d)),
            low: column == Stage::OnHold
                || (column != Stage::Done
                    && days_until_deadline.is_some_and(|d| t.low.contains(d))),
        }
    }

    /// 汇总风险卡片 (保持输入顺序)
    pub fn build_breakdown(&self, projects: &[DerivedProject]) -> RiskTierBreakdown {
        let mut breakdown = RiskTierBreakdown::default();

        for project in projects {
            let tiers = self.classify(project);
            for tier in RiskTier::ALL {
                if tiers.contains(tier) {
                    breakdown.bucket_mut(tier).push(project);
                }
            }
        }

        breakdown
    }
}
