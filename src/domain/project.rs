// ==========================================
// 项目组合管理系统 - 项目领域模型
// ==========================================
// 依据: 报表模块 - 项目记录 / 派生项目
// ==========================================
// 红线: ProjectRecord 由外部持久化层拥有,引擎只读不改
// ==========================================

use crate::domain::date_field;
use crate::domain::types::{RagLabel, Stage};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

// ==========================================
// DateRange - 阶段起止日期
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, with = "date_field::lenient")]
    pub start: Option<NaiveDate>,
    #[serde(default, with = "date_field::lenient")]
    pub finish: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, finish: Option<NaiveDate>) -> Self {
        Self { start, finish }
    }
}

// ==========================================
// ProjectRecord - 原始项目记录
// ==========================================
// 用途: 持久化层输入,字段名与前端/后端 JSON 一致 (camelCase)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,            // 记录ID (可选,透传)
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,                  // 项目名称
    #[serde(default, deserialize_with = "lenient_text")]
    pub division: Option<String>,      // 事业部
    #[serde(default, deserialize_with = "lenient_string")]
    pub kanban_status: String,         // 看板状态 (规范键或旧别名)
    #[serde(default, deserialize_with = "lenient_text")]
    pub project_manager: Option<String>,  // 项目经理 (PM)
    #[serde(default, deserialize_with = "lenient_text")]
    pub business_partner: Option<String>, // 业务伙伴 (BP)

    // ===== 阶段日期 =====
    #[serde(default, deserialize_with = "lenient_range")]
    pub psd: DateRange,
    #[serde(default, deserialize_with = "lenient_range")]
    pub investment: DateRange,
    #[serde(default, deserialize_with = "lenient_range")]
    pub procurement: DateRange,
    #[serde(default, deserialize_with = "lenient_range")]
    pub implementation: DateRange,

    // ===== 计划基线 (延期计算对照) =====
    #[serde(default, deserialize_with = "lenient_range")]
    pub actual_dates: DateRange,
}

impl ProjectRecord {
    /// 事业部 (空白视为缺失)
    pub fn division_name(&self) -> Option<&str> {
        non_blank(self.division.as_deref())
    }

    /// 项目经理 (空白视为缺失)
    pub fn project_manager_name(&self) -> Option<&str> {
        non_blank(self.project_manager.as_deref())
    }

    /// 业务伙伴 (空白视为缺失)
    pub fn business_partner_name(&self) -> Option<&str> {
        non_blank(self.business_partner.as_deref())
    }
}

/// 阶段日期宽松读取: 非对象 (null/字符串/数字) 视为无日期
fn lenient_range<'de, D>(deserializer: D) -> Result<DateRange, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        value @ serde_json::Value::Object(_) => serde_json::from_value::<DateRange>(value).unwrap_or_default(),
        _ => DateRange::default(),
    })
}

/// 文本字段宽松读取: 字符串原样,数字转文本,其他 (null/布尔/对象/数组) 视为缺失
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

// ==========================================
// RagStatus - 健康度 + 展示元数据
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RagStatus {
    pub label: RagLabel,
    pub color: &'static str,
    pub text_color: &'static str,
    pub border_color: &'static str,
    pub chart_color: &'static str,
}

impl RagStatus {
    /// 按标签构造 (颜色为固定展示元数据)
    pub fn for_label(label: RagLabel) -> Self {
        match label {
            RagLabel::Red => Self {
                label,
                color: "#FEE2E2",
                text_color: "#991B1B",
                border_color: "#FCA5A5",
                chart_color: "#EF4444",
            },
            RagLabel::Amber => Self {
                label,
                color: "#FEF3C7",
                text_color: "#92400E",
                border_color: "#FCD34D",
                chart_color: "#F59E0B",
            },
            RagLabel::Green => Self {
                label,
                color: "#D1FAE5",
                text_color: "#065F46",
                border_color: "#6EE7B7",
                chart_color: "#10B981",
            },
        }
    }
}

// ==========================================
// DerivedProject - 派生项目 (不持久化)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedProject {
    #[serde(flatten)]
    pub record: ProjectRecord,
    pub column: Stage,                       // 规范阶段
    #[serde(with = "date_field::lenient")]
    pub finish_date: Option<NaiveDate>,      // 决定 RAG 的日期
    pub rag_status: RagStatus,
    pub days_until_deadline: Option<i64>,    // finish - today (天)
}

impl DerivedProject {
    pub fn rag_label(&self) -> RagLabel {
        self.rag_status.label
    }
}

// ==========================================
// DelayedProject - 延期项目
// ==========================================
// delay > 0 延后, delay < 0 提前
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DelayedProject {
    #[serde(flatten)]
    pub project: DerivedProject,
    pub delay: i64,
}
