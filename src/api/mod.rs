// ==========================================
// 项目组合管理系统 - API 层
// ==========================================
// 职责: 对展示层/命令行提供报表查询接口
// ==========================================

pub mod error;
pub mod reporting_api;

pub use error::{ApiError, ApiResult};
pub use reporting_api::ReportingApi;
