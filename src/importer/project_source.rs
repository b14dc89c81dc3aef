// ==========================================
// 项目组合管理系统 - 项目数据源 Trait
// ==========================================
// 职责: 定义报表所需的项目列表读取接口
// 说明: 持久化 (CRUD / 后端服务) 属于外部协作方,此处只定义读取边界
// ==========================================

use crate::domain::project::ProjectRecord;
use crate::importer::error::ImportResult;

// ==========================================
// ProjectSource Trait
// ==========================================
// 实现者: JsonFileSource / CsvFileSource / InMemorySource
pub trait ProjectSource: Send + Sync {
    /// 读取有序项目列表
    ///
    /// # 返回
    /// - Ok(Vec<ProjectRecord>): 按数据源原始顺序
    /// - Err(ImportError): 文件缺失/格式错误等
    fn load_projects(&self) -> ImportResult<Vec<ProjectRecord>>;

    /// 数据源描述 (日志用)
    fn describe(&self) -> String;
}

// ==========================================
// InMemorySource - 内存数据源
// ==========================================
// 用途: 嵌入调用 / 测试
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<ProjectRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        Self { records }
    }
}

impl ProjectSource for InMemorySource {
    fn load_projects(&self) -> ImportResult<Vec<ProjectRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("memory({} records)", self.records.len())
    }
}
