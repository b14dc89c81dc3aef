// ==========================================
// 项目组合管理系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,转换导入/配置错误为用户友好的错误消息
// ==========================================

use crate::config::ConfigError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入校验错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 数据源错误
    // ==========================================
    #[error("项目数据读取失败: {0}")]
    ImportError(String),

    #[error("数据源不可用: {0}")]
    SourceUnavailable(String),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigError(String),
}

// ==========================================
// 从 ImportError 转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::FileNotFound(path) => {
                ApiError::SourceUnavailable(format!("文件不存在: {}", path))
            }
            other => ApiError::ImportError(other.to_string()),
        }
    }
}

// ==========================================
// 从 ConfigError 转换
// ==========================================
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// API层Result类型别名
pub type ApiResult<T> = Result<T, ApiError>;
