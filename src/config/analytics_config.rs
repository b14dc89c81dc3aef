// ==========================================
// 项目组合管理系统 - 报表分析配置
// ==========================================
// 职责: RAG 阈值 / 风险分级窗口 / 分组参数
// 存储: JSON 配置文件 (camelCase),所有字段可缺省
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::types::RagLabel;
use serde::{Deserialize, Serialize};

/// 缺失截止日期时的 RAG 标签 (乐观默认,保留兼容)
pub const MISSING_FINISH_DATE_LABEL: RagLabel = RagLabel::Green;

/// Amber 窗口天数: 0 <= diff <= 7
pub const DEFAULT_AMBER_WINDOW_DAYS: i64 = 7;

/// 看板阶段内 Top 事业部数量
pub const DEFAULT_TOP_DIVISIONS_LIMIT: usize = 3;

/// 未分配 PM/BP 的分组名称
pub const UNASSIGNED_LABEL: &str = "Unassigned";

// ==========================================
// DayWindow - 闭区间天数窗口
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    pub min: i64,
    pub max: i64,
}

impl DayWindow {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, days: i64) -> bool {
        self.min <= days && days <= self.max
    }

    fn validate(&self, key: &str) -> ConfigResult<()> {
        if self.min > self.max {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("min={} 大于 max={}", self.min, self.max),
            });
        }
        Ok(())
    }
}

// ==========================================
// RagThresholds - RAG 阈值
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RagThresholds {
    pub amber_window_days: i64,
    pub missing_finish_label: RagLabel,
}

impl Default for RagThresholds {
    fn default() -> Self {
        Self {
            amber_window_days: DEFAULT_AMBER_WINDOW_DAYS,
            missing_finish_label: MISSING_FINISH_DATE_LABEL,
        }
    }
}

// ==========================================
// RiskTierThresholds - 风险分级窗口
// ==========================================
// Overdue 固定为 days < 0
// High 与 Medium 在 10..=14 重叠,保留原规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskTierThresholds {
    pub critical: DayWindow,
    pub high: DayWindow,
    pub medium: DayWindow,
    pub low: DayWindow,
}

impl Default for RiskTierThresholds {
    fn default() -> Self {
        Self {
            critical: DayWindow::new(0, 4),
            high: DayWindow::new(5, 14),
            medium: DayWindow::new(10, 15),
            low: DayWindow::new(16, 21),
        }
    }
}

// ==========================================
// AnalyticsConfig - 报表分析配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsConfig {
    pub rag: RagThresholds,
    pub risk_tiers: RiskTierThresholds,
    pub top_divisions_limit: usize,
    pub unassigned_label: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            rag: RagThresholds::default(),
            risk_tiers: RiskTierThresholds::default(),
            top_divisions_limit: DEFAULT_TOP_DIVISIONS_LIMIT,
            unassigned_label: UNASSIGNED_LABEL.to_string(),
        }
    }
}

impl AnalyticsConfig {
    /// 配置校验
    ///
    /// # 规则
    /// - amberWindowDays >= 0
    /// - 各风险窗口 min <= max
    /// - topDivisionsLimit >= 1
    /// - unassignedLabel 非空
    pub fn validate(&self) -> ConfigResult<()> {
        if self.rag.amber_window_days < 0 {
            return Err(ConfigError::InvalidValue {
                key: "rag.amberWindowDays".to_string(),
                message: format!("不能为负数: {}", self.rag.amber_window_days),
            });
        }

        self.risk_tiers.critical.validate("riskTiers.critical")?;
        self.risk_tiers.high.validate("riskTiers.high")?;
        self.risk_tiers.medium.validate("riskTiers.medium")?;
        self.risk_tiers.low.validate("riskTiers.low")?;

        if self.top_divisions_limit == 0 {
            return Err(ConfigError::InvalidValue {
                key: "topDivisionsLimit".to_string(),
                message: "至少为 1".to_string(),
            });
        }

        if self.unassigned_label.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "unassignedLabel".to_string(),
                message: "不能为空".to_string(),
            });
        }

        Ok(())
    }
}
