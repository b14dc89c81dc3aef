// ==========================================
// 项目组合管理系统 - 日期工具
// ==========================================
// 职责: 天数差、月份键
// 约定: 输入均为日历日期 (已截断到零点),天数差为精确整数
// ==========================================

use chrono::{Datelike, Local, NaiveDate};

/// 计算 to - from 的天数
///
/// 两端都是零点,ceil((to - from) / 1天) 即整数天差
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// 月份键 (YYYY-MM),字典序即时间序
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// 本地时区的今天
///
/// 仅在 API 层读取一次,引擎内部一律使用显式传入的 today
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// 百分比 = round(count / total * 100), total 为 0 时返回 0
pub fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}
