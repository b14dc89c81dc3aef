// ==========================================
// 项目组合管理系统 - 汇总统计引擎
// ==========================================
// 职责: KPI / 看板阶段分布 / 事业部分布 / PM-BP 团队分组
// 输入: 派生项目列表 (已筛选)
// 红线: 每个维度内每个项目只计一次; 分组稳定 (同计数保持首次出现顺序)
// ==========================================

use crate::config::{AnalyticsConfig, DEFAULT_TOP_DIVISIONS_LIMIT, UNASSIGNED_LABEL};
use crate::domain::project::DerivedProject;
use crate::domain::report::{DivisionCount, DivisionSummary, KanbanBucket, KpiSummary, TeamGroup};
use crate::domain::types::{RagLabel, Stage};
use crate::engine::date_utils::percentage;
use std::collections::HashMap;

/// 团队角色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamRole {
    ProjectManager,
    BusinessPartner,
}

// ==========================================
// AggregationEngine - 汇总统计引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct AggregationEngine {
    top_divisions_limit: usize,
    unassigned_label: String,
}

impl AggregationEngine {
    pub fn new(config: &AnalyticsConfig) -> Self {
        Self {
            top_divisions_limit: config.top_divisions_limit,
            unassigned_label: config.unassigned_label.clone(),
        }
    }

    // ==========================================
    // KPI
    // ==========================================

    /// KPI 卡片统计
    ///
    /// red + amber + green == total (每个项目恰有一个 RAG 标签)
    pub fn kpis(&self, projects: &[DerivedProject]) -> KpiSummary {
        let total = projects.len();
        let count_rag = |label: RagLabel| projects.iter().filter(|p| p.rag_label() == label).count();
        let count_stage = |stage: Stage| projects.iter().filter(|p| p.column == stage).count();

        let red = count_rag(RagLabel::Red);
        let amber = count_rag(RagLabel::Amber);
        let green = count_rag(RagLabel::Green);
        let on_hold = count_stage(Stage::OnHold);
        let completed = count_stage(Stage::Done);

        KpiSummary {
            total_projects: total,
            red_count: red,
            red_percentage: percentage(red, total),
            amber_count: amber,
            amber_percentage: percentage(amber, total),
            green_count: green,
            green_percentage: percentage(green, total),
            on_hold_count: on_hold,
            on_hold_percentage: percentage(on_hold, total),
            completed_count: completed,
            completed_percentage: percentage(completed, total),
        }
    }

    // ==========================================
    // 看板阶段分布
    // ==========================================

    /// 按看板列顺序输出 count > 0 的阶段
    pub fn pipeline(&self, projects: &[DerivedProject]) -> Vec<KanbanBucket> {
        Stage::ALL
            .iter()
            .filter_map(|stage| {
                let members: Vec<&DerivedProject> =
                    projects.iter().filter(|p| p.column == *stage).collect();
                if members.is_empty() {
                    return None;
                }

                let all_divisions = Self::count_divisions(members.iter().copied());
                let top_divisions = all_divisions
                    .iter()
                    .take(self.top_divisions_limit)
                    .cloned()
                    .collect();

                Some(KanbanBucket {
                    status: stage.display_label().to_string(),
                    count: members.len(),
                    column_key: *stage,
                    top_divisions,
                    all_divisions,
                })
            })
            .collect()
    }

    // ==========================================
    // 事业部分布
    // ==========================================

    /// 事业部分布 (无事业部的项目不计入)
    pub fn divisions(&self, projects: &[DerivedProject]) -> Vec<DivisionSummary> {
        group_stable(projects.iter(), |p| p.record.division_name().map(str::to_string))
            .into_iter()
            .map(|(division, members)| {
                let count_rag =
                    |label: RagLabel| members.iter().filter(|p| p.rag_label() == label).count();
                DivisionSummary {
                    count: members.len(),
                    red_count: count_rag(RagLabel::Red),
                    amber_count: count_rag(RagLabel::Amber),
                    green_count: count_rag(RagLabel::Green),
                    division,
                }
            })
            .collect()
    }

    fn count_divisions<'a, I>(projects: I) -> Vec<DivisionCount>
    where
        I: Iterator<Item = &'a DerivedProject>,
    {
        group_stable(projects, |p| p.record.division_name().map(str::to_string))
            .into_iter()
            .map(|(division, members)| DivisionCount {
                division,
                count: members.len(),
            })
            .collect()
    }

    // ==========================================
    // 团队分组 (仅活跃阶段)
    // ==========================================

    /// PM / BP 分组,未分配归入 unassigned_label
    pub fn team_groups(&self, projects: &[DerivedProject], role: TeamRole) -> Vec<TeamGroup> {
        let active = projects.iter().filter(|p| p.column.is_active());

        group_stable(active, |p| {
            let name = match role {
                TeamRole::ProjectManager => p.record.project_manager_name(),
                TeamRole::BusinessPartner => p.record.business_partner_name(),
            };
            Some(name.unwrap_or(self.unassigned_label.as_str()).to_string())
        })
        .into_iter()
        .map(|(name, members)| TeamGroup {
            count: members.len(),
            projects: members.into_iter().cloned().collect(),
            name,
        })
        .collect()
    }
}

impl Default for AggregationEngine {
    fn default() -> Self {
        Self {
            top_divisions_limit: DEFAULT_TOP_DIVISIONS_LIMIT,
            unassigned_label: UNASSIGNED_LABEL.to_string(),
        }
    }
}

// ==========================================
// 稳定分组
// ==========================================

/// 按键分组,组按首次出现排序后再按成员数降序稳定排序
///
/// key 返回 None 的项目不参与分组
fn group_stable<'a, I, F>(projects: I, key: F) -> Vec<(String, Vec<&'a DerivedProject>)>
where
    I: Iterator<Item = &'a DerivedProject>,
    F: Fn(&DerivedProject) -> Option<String>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<&'a DerivedProject>)> = Vec::new();

    for project in projects {
        let Some(k) = key(project) else {
            continue;
        };
        match index.get(&k) {
            Some(&i) => groups[i].1.push(project),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![project]));
            }
        }
    }

    // sort_by 为稳定排序
    groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    groups
}
