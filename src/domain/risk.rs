// ==========================================
// 项目组合管理系统 - 风险分级领域模型
// ==========================================
// 依据: 报表模块 - 风险卡片 (Overdue/Critical/High/Medium/Low)
// ==========================================

use crate::domain::project::DerivedProject;
use crate::domain::types::RiskTier;
use serde::Serialize;

// ==========================================
// RiskTierSet - 单项目风险分级结果
// ==========================================
// 各分级独立判定,一个项目可同时命中多个分级
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskTierSet {
    pub overdue: bool,
    pub critical: bool,
    pub high: bool,
    pub medium: bool,
    pub low: bool,
}

impl RiskTierSet {
    /// 是否命中指定分级
    pub fn contains(&self, tier: RiskTier) -> bool {
        match tier {
            RiskTier::Overdue => self.overdue,
            RiskTier::Critical => self.critical,
            RiskTier::High => self.high,
            RiskTier::Medium => self.medium,
            RiskTier::Low => self.low,
        }
    }

    /// 命中的分级列表 (按 RiskTier::ALL 顺序)
    pub fn tiers(&self) -> Vec<RiskTier> {
        RiskTier::ALL
            .iter()
            .copied()
            .filter(|tier| self.contains(*tier))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers().is_empty()
    }
}

// ==========================================
// RiskTierBucket - 单个风险卡片
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RiskTierBucket {
    pub count: usize,
    pub projects: Vec<DerivedProject>,
}

impl RiskTierBucket {
    pub(crate) fn push(&mut self, project: &DerivedProject) {
        self.projects.push(project.clone());
        self.count += 1;
    }
}

// ==========================================
// RiskTierBreakdown - 五个风险卡片
// ==========================================
// 注意: 计数之和不等于项目总数 (非划分)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RiskTierBreakdown {
    pub overdue: RiskTierBucket,
    pub critical: RiskTierBucket,
    pub high: RiskTierBucket,
    pub medium: RiskTierBucket,
    pub low: RiskTierBucket,
}

impl RiskTierBreakdown {
    pub fn bucket(&self, tier: RiskTier) -> &RiskTierBucket {
        match tier {
            RiskTier::Overdue => &self.overdue,
            RiskTier::Critical => &self.critical,
            RiskTier::High => &self.high,
            RiskTier::Medium => &self.medium,
            RiskTier::Low => &self.low,
        }
    }

    pub(crate) fn bucket_mut(&mut self, tier: RiskTier) -> &mut RiskTierBucket {
        match tier {
            RiskTier::Overdue => &mut self.overdue,
            RiskTier::Critical => &mut self.critical,
            RiskTier::High => &mut self.high,
            RiskTier::Medium => &mut self.medium,
            RiskTier::Low => &mut self.low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_set_lists_overlapping_tiers() {
        let set = RiskTierSet {
            high: true,
            medium: true,
            ..Default::default()
        };
        assert_eq!(set.tiers(), vec![RiskTier::High, RiskTier::Medium]);
        assert!(!set.is_empty());
        assert!(RiskTierSet::default().is_empty());
    }
}
