// ==========================================
// 项目组合管理系统 - 领域类型定义
// ==========================================
// 依据: 报表模块 - 看板阶段 / RAG 健康度 / 风险分级
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 看板阶段 (Stage / column)
// ==========================================
// 九个规范阶段,顺序即看板列顺序
// 序列化格式: 小写键 (与前端 columnKey 一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    OnHold,         // 暂停
    Backlog,        // 待办
    PsdPre,         // PSD 准备中
    PsdReady,       // PSD 就绪
    InvApproved,    // 投资已批准
    Procurement,    // 采购
    Implementation, // 实施
    Uat,            // 用户验收
    Done,           // 完成
}

impl Stage {
    /// 全部阶段 (看板列顺序)
    pub const ALL: [Stage; 9] = [
        Stage::OnHold,
        Stage::Backlog,
        Stage::PsdPre,
        Stage::PsdReady,
        Stage::InvApproved,
        Stage::Procurement,
        Stage::Implementation,
        Stage::Uat,
        Stage::Done,
    ];

    /// 活跃阶段 (团队分组统计范围)
    pub const ACTIVE: [Stage; 6] = [
        Stage::PsdPre,
        Stage::PsdReady,
        Stage::InvApproved,
        Stage::Procurement,
        Stage::Implementation,
        Stage::Uat,
    ];

    /// 规范键
    pub fn key(&self) -> &'static str {
        match self {
            Stage::OnHold => "onhold",
            Stage::Backlog => "backlog",
            Stage::PsdPre => "psdpre",
            Stage::PsdReady => "psdready",
            Stage::InvApproved => "invapproved",
            Stage::Procurement => "procurement",
            Stage::Implementation => "implementation",
            Stage::Uat => "uat",
            Stage::Done => "done",
        }
    }

    /// 看板列显示名称
    pub fn display_label(&self) -> &'static str {
        match self {
            Stage::OnHold => "On Hold",
            Stage::Backlog => "Backlog",
            Stage::PsdPre => "PSD Preparation",
            Stage::PsdReady => "PSD Ready",
            Stage::InvApproved => "Investment Approved",
            Stage::Procurement => "Procurement",
            Stage::Implementation => "Implementation",
            Stage::Uat => "UAT",
            Stage::Done => "Done",
        }
    }

    /// 从规范键解析 (不含旧别名,别名由 StageResolver 处理)
    pub fn from_key(key: &str) -> Option<Self> {
        Stage::ALL.iter().copied().find(|stage| stage.key() == key)
    }

    /// 是否活跃阶段
    pub fn is_active(&self) -> bool {
        Stage::ACTIVE.contains(self)
    }

    /// 是否排除在截止期风险之外 (暂停/完成)
    pub fn is_parked(&self) -> bool {
        matches!(self, Stage::OnHold | Stage::Done)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ==========================================
// RAG 健康度 (Red / Amber / Green)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RagLabel {
    Red,   // 已逾期
    Amber, // 临近截止 / 暂停
    Green, // 正常
}

impl fmt::Display for RagLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RagLabel::Red => write!(f, "Red"),
            RagLabel::Amber => write!(f, "Amber"),
            RagLabel::Green => write!(f, "Green"),
        }
    }
}

// ==========================================
// 风险分级 (Risk Tier)
// ==========================================
// 注意: 分级之间允许重叠,不是划分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Overdue,  // 已逾期
    Critical, // 危急
    High,     // 高
    Medium,   // 中
    Low,      // 低
}

impl RiskTier {
    pub const ALL: [RiskTier; 5] = [
        RiskTier::Overdue,
        RiskTier::Critical,
        RiskTier::High,
        RiskTier::Medium,
        RiskTier::Low,
    ];
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTier::Overdue => write!(f, "overdue"),
            RiskTier::Critical => write!(f, "critical"),
            RiskTier::High => write!(f, "high"),
            RiskTier::Medium => write!(f, "medium"),
            RiskTier::Low => write!(f, "low"),
        }
    }
}
