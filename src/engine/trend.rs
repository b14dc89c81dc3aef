// ==========================================
// 项目组合管理系统 - 月度趋势
// ==========================================
// 职责: 按实施开始/完成日期统计每月 started / completed / inProgress
// 输入: 原始 implementation.start / implementation.finish
// ==========================================

use crate::domain::project::ProjectRecord;
use crate::domain::report::MonthlyTrend;
use crate::engine::date_utils::month_key;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlyTrendBuilder;

impl MonthlyTrendBuilder {
    pub fn new() -> Self {
        Self
    }

    /// 构建月度趋势
    ///
    /// 步骤:
    /// 1. 开始日期所在月 started += 1; 完成日期所在月 completed += 1 (互相独立)
    /// 2. 月份升序遍历, running = max(0, running + started - completed)
    ///
    /// 只输出至少有一个事件的月份
    pub fn build<'a, I>(&self, records: I) -> Vec<MonthlyTrend>
    where
        I: IntoIterator<Item = &'a ProjectRecord>,
    {
        // month -> (started, completed); BTreeMap 保证 YYYY-MM 升序
        let mut months: BTreeMap<String, (usize, usize)> = BTreeMap::new();

        for record in records {
            if let Some(start) = record.implementation.start {
                months.entry(month_key(start)).or_default().0 += 1;
            }
            if let Some(finish) = record.implementation.finish {
                months.entry(month_key(finish)).or_default().1 += 1;
            }
        }

        let mut running: i64 = 0;
        months
            .into_iter()
            .map(|(month, (started, completed))| {
                running = (running + started as i64 - completed as i64).max(0);
                MonthlyTrend {
                    month,
                    started,
                    completed,
                    in_progress: running as usize,
                }
            })
            .collect()
    }
}
