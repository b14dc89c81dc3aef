// ==========================================
// 项目组合管理系统 - 文件数据源实现
// ==========================================
// 支持: JSON (.json) / CSV (.csv)
// 规则: 日期宽松解析,非法值视为缺失; 完全空白行跳过
// ==========================================

use crate::domain::date_field::parse_lenient;
use crate::domain::project::{DateRange, ProjectRecord};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::project_source::ProjectSource;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

// ==========================================
// FileFormat - 文件格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Csv,
}

impl FileFormat {
    /// 按扩展名识别格式
    pub fn detect(path: &Path) -> ImportResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(FileFormat::Json),
            "csv" => Ok(FileFormat::Csv),
            _ => Err(ImportError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// 打开文件数据源
///
/// # 参数
/// - path: 文件路径
/// - format: 显式格式,None 时按扩展名识别
pub fn open_source(path: &Path, format: Option<FileFormat>) -> ImportResult<Box<dyn ProjectSource>> {
    let format = match format {
        Some(f) => f,
        None => FileFormat::detect(path)?,
    };

    Ok(match format {
        FileFormat::Json => Box::new(JsonFileSource::new(path)),
        FileFormat::Csv => Box::new(CsvFileSource::new(path)),
    })
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

// ==========================================
// JsonFileSource - JSON 数据源
// ==========================================
// 接受两种结构: [ {...}, ... ] 或 { "projects": [ {...}, ... ] }
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProjectDocument {
    List(Vec<ProjectRecord>),
    Wrapped { projects: Vec<ProjectRecord> },
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProjectSource for JsonFileSource {
    fn load_projects(&self) -> ImportResult<Vec<ProjectRecord>> {
        ensure_exists(&self.path)?;

        let file = File::open(&self.path)?;
        let document: ProjectDocument = serde_json::from_reader(std::io::BufReader::new(file))?;

        let records = match document {
            ProjectDocument::List(records) => records,
            ProjectDocument::Wrapped { projects } => projects,
        };

        tracing::debug!(path = %self.path.display(), count = records.len(), "JSON 项目列表已读取");
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("json({})", self.path.display())
    }
}

// ==========================================
// CsvFileSource - CSV 数据源
// ==========================================
// 表头按名称匹配 (忽略大小写/空格/下划线/连字符),缺失列视为空
//
// 列: name, division, kanbanStatus, projectManager, businessPartner,
//     psdStart, psdFinish, investmentStart, investmentFinish,
//     procurementStart, procurementFinish, implementationStart,
//     implementationFinish, actualStart, actualFinish
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 表头归一化: kanban_status / Kanban Status / kanbanStatus → kanbanstatus
    fn normalize_header(header: &str) -> String {
        header
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect()
    }

    fn row_to_record(row: &HashMap<String, String>) -> ProjectRecord {
        let text = |key: &str| {
            row.get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let date = |key: &str| row.get(key).and_then(|v| parse_lenient(v));
        let range = |prefix: &str| {
            DateRange::new(
                date(&format!("{}start", prefix)),
                date(&format!("{}finish", prefix)),
            )
        };

        ProjectRecord {
            id: text("id"),
            name: text("name").unwrap_or_default(),
            division: text("division"),
            kanban_status: text("kanbanstatus").unwrap_or_default(),
            project_manager: text("projectmanager"),
            business_partner: text("businesspartner"),
            psd: range("psd"),
            investment: range("investment"),
            procurement: range("procurement"),
            implementation: range("implementation"),
            actual_dates: range("actual"),
        }
    }
}

impl ProjectSource for CsvFileSource {
    fn load_projects(&self) -> ImportResult<Vec<ProjectRecord>> {
        ensure_exists(&self.path)?;

        let file = File::open(&self.path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(Self::normalize_header)
            .collect();
        tracing::debug!(columns = headers.len(), "CSV 表头已读取");

        // 读取所有行
        let mut records = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                tracing::warn!(row = row_idx + 2, "跳过空白行");
                continue;
            }

            records.push(Self::row_to_record(&row_map));
        }

        tracing::debug!(path = %self.path.display(), count = records.len(), "CSV 项目列表已读取");
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("csv({})", self.path.display())
    }
}
