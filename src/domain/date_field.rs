// ==========================================
// 项目组合管理系统 - 日期字段解析
// ==========================================
// 职责: 记录中日期字段的宽松解析
// 规则: 空值/非法值一律视为"缺失",不报错
// ==========================================

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// 支持的纯日期格式
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y%m%d", "%Y/%m/%d"];

/// 支持的日期时间格式 (无时区)
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

/// 宽松解析日期
///
/// # 返回
/// - Some(NaiveDate): 解析成功 (日期时间截断到当天零点)
/// - None: 空字符串或无法识别的格式
pub fn parse_lenient(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// serde 适配: `Option<NaiveDate>` 宽松读、ISO 写
///
/// 用法: `#[serde(default, with = "crate::domain::date_field::lenient")]`
pub mod lenient {
    use super::parse_lenient;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        // 非字符串 (数字/布尔/对象) 视为缺失
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(s) => parse_lenient(&s),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_plain_dates() {
        assert_eq!(parse_lenient("2024-01-10"), Some(d(2024, 1, 10)));
        assert_eq!(parse_lenient("20240110"), Some(d(2024, 1, 10)));
        assert_eq!(parse_lenient(" 2024/01/10 "), Some(d(2024, 1, 10)));
    }

    #[test]
    fn test_parse_datetimes_truncate_to_midnight() {
        assert_eq!(parse_lenient("2024-01-10T23:59:59Z"), Some(d(2024, 1, 10)));
        assert_eq!(parse_lenient("2024-01-10T08:30:00"), Some(d(2024, 1, 10)));
        assert_eq!(parse_lenient("2024-01-10 08:30:00"), Some(d(2024, 1, 10)));
    }

    #[test]
    fn test_parse_empty_or_invalid_is_absent() {
        assert_eq!(parse_lenient(""), None);
        assert_eq!(parse_lenient("   "), None);
        assert_eq!(parse_lenient("not a date"), None);
        assert_eq!(parse_lenient("2024-13-45"), None);
    }
}
