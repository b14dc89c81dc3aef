// ==========================================
// 项目组合管理系统 - 延期计算
// ==========================================
// 职责: 实施完成日期 vs 计划基线 (actualDates.finish) 的天数差
// 约定: 正数 = 延后, 负数 = 提前
// ==========================================

use crate::domain::project::{DelayedProject, DerivedProject, ProjectRecord};
use crate::engine::date_utils::days_between;

#[derive(Debug, Clone, Copy, Default)]
pub struct DelayCalculator;

impl DelayCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 单项目延期天数
    ///
    /// # 返回
    /// - Some(delay): implementation.finish - actualDates.finish
    /// - None: 任一日期缺失
    pub fn delay_days(&self, record: &ProjectRecord) -> Option<i64> {
        let actual_finish = record.implementation.finish?;
        let planned_finish = record.actual_dates.finish?;
        Some(days_between(planned_finish, actual_finish))
    }

    /// 延期列表
    ///
    /// 排除无法计算与零延期的项目,按 delay 降序 (稳定排序)
    pub fn collect_delays(&self, projects: &[DerivedProject]) -> Vec<DelayedProject> {
        let mut delayed: Vec<DelayedProject> = projects
            .iter()
            .filter_map(|project| {
                self.delay_days(&project.record)
                    .filter(|delay| *delay != 0)
                    .map(|delay| DelayedProject {
                        project: project.clone(),
                        delay,
                    })
            })
            .collect();

        delayed.sort_by(|a, b| b.delay.cmp(&a.delay));
        delayed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::DateRange;
    use chrono::NaiveDate;

    fn record(actual: Option<NaiveDate>, planned: Option<NaiveDate>) -> ProjectRecord {
        ProjectRecord {
            implementation: DateRange::new(None, actual),
            actual_dates: DateRange::new(None, planned),
            ..Default::default()
        }
    }

    fn d(m: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, m, day)
    }

    #[test]
    fn test_late_finish_is_positive() {
        let calc = DelayCalculator::new();
        assert_eq!(calc.delay_days(&record(d(3, 10), d(3, 1))), Some(9));
    }

    #[test]
    fn test_early_finish_is_negative() {
        let calc = DelayCalculator::new();
        assert_eq!(calc.delay_days(&record(d(2, 20), d(3, 1))), Some(-10));
    }

    #[test]
    fn test_missing_either_date_is_none() {
        let calc = DelayCalculator::new();
        assert_eq!(calc.delay_days(&record(None, d(3, 1))), None);
        assert_eq!(calc.delay_days(&record(d(3, 1), None)), None);
        assert_eq!(calc.delay_days(&record(None, None)), None);
    }
}
