// ==========================================
// 项目组合管理系统 - 导入层
// ==========================================
// 职责: 从外部数据源读取项目列表,交给报表引擎
// 支持: JSON, CSV, 内存
// ==========================================

// 模块声明
pub mod error;
pub mod file_parser;
pub mod project_source;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use file_parser::{open_source, CsvFileSource, FileFormat, JsonFileSource};
pub use project_source::{InMemorySource, ProjectSource};
