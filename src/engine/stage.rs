// ==========================================
// 项目组合管理系统 - 看板阶段解析器
// ==========================================
// 职责: 原始 kanbanStatus (含旧别名) → 九个规范阶段之一
// 规则: 先查旧别名表,再匹配规范键,未知/空值 → backlog
// 红线: 全函数,不报错 (兼容未知数据)
// ==========================================

use crate::domain::types::Stage;

/// 旧别名表 (有限集合,查表优先于规范键匹配)
const LEGACY_ALIASES: [(&str, Stage); 6] = [
    ("psd-prep", Stage::PsdPre),
    ("psd-ready", Stage::PsdReady),
    ("approved", Stage::InvApproved),
    ("uat", Stage::Uat),
    ("done", Stage::Done),
    ("on-hold", Stage::OnHold),
];

/// 未知/空值默认阶段
pub const DEFAULT_STAGE: Stage = Stage::Backlog;

// ==========================================
// StageResolver - 看板阶段解析器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct StageResolver;

impl StageResolver {
    pub fn new() -> Self {
        Self
    }

    /// 解析看板阶段
    ///
    /// # 参数
    /// - `raw`: 原始 kanbanStatus (大小写与首尾空白不敏感)
    ///
    /// # 返回
    /// 规范阶段,未识别时为 backlog
    pub fn resolve(&self, raw: &str) -> Stage {
        let token = raw.trim().to_ascii_lowercase();
        if token.is_empty() {
            return DEFAULT_STAGE;
        }

        if let Some(stage) = Self::translate_alias(&token) {
            return stage;
        }

        match Stage::from_key(&token) {
            Some(stage) => stage,
            None => {
                tracing::trace!(kanban_status = %raw, "未识别的看板状态,归入 backlog");
                DEFAULT_STAGE
            }
        }
    }

    fn translate_alias(token: &str) -> Option<Stage> {
        LEGACY_ALIASES
            .iter()
            .find(|(alias, _)| *alias == token)
            .map(|(_, stage)| *stage)
    }
}
