// ==========================================
// 项目组合管理系统 - 命令行主入口
// ==========================================
// 子命令: report / trends / classify
// 输出: 报表 JSON 写到 stdout,日志写到 stderr
// ==========================================

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use portfolio_analytics::config::{ConfigManager, CONFIG_PATH_ENV};
use portfolio_analytics::importer::{open_source, FileFormat};
use portfolio_analytics::logging::{self, LogFormat};
use portfolio_analytics::{ReportFilter, ReportingApi, Stage};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    Json,
    Csv,
}

impl From<InputFormat> for FileFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Json => FileFormat::Json,
            InputFormat::Csv => FileFormat::Csv,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "portfolio-analytics")]
#[command(about = "项目组合报表分析与风险分级", long_about = None)]
#[command(version)]
struct Cli {
    /// 日志以 JSON 行输出
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// 数据源与配置参数 (各子命令共用)
#[derive(clap::Args, Debug)]
struct SourceArgs {
    /// 项目列表文件 (.json / .csv)
    input: PathBuf,

    /// 输入格式 (默认按扩展名识别)
    #[arg(short, long, value_enum)]
    format: Option<InputFormat>,

    /// 配置文件路径
    #[arg(long, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,

    /// 格式化输出 JSON
    #[arg(long)]
    pretty: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 生成完整报表
    Report {
        #[command(flatten)]
        source: SourceArgs,

        /// 计算日期 YYYY-MM-DD (默认本地今天)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,

        /// 按部门筛选
        #[arg(long)]
        division: Option<String>,

        /// 按项目经理筛选 ("Unassigned" 表示未分配)
        #[arg(long)]
        pm: Option<String>,

        /// 按业务伙伴筛选 ("Unassigned" 表示未分配)
        #[arg(long)]
        bp: Option<String>,

        /// 按阶段筛选,可重复
        #[arg(long = "stage", value_parser = parse_stage)]
        stages: Vec<Stage>,
    },

    /// 输出月度趋势
    Trends {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// 输出派生项目列表 (阶段 / RAG / 剩余天数)
    Classify {
        #[command(flatten)]
        source: SourceArgs,

        /// 计算日期 YYYY-MM-DD (默认本地今天)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| format!("日期格式应为 YYYY-MM-DD: {}", e))
}

fn parse_stage(raw: &str) -> Result<Stage, String> {
    Stage::from_key(&raw.trim().to_ascii_lowercase()).ok_or_else(|| {
        let keys: Vec<&str> = Stage::ALL.iter().map(|s| s.key()).collect();
        format!("未知阶段 '{}',可选: {}", raw, keys.join(", "))
    })
}

fn build_api(source: &SourceArgs) -> Result<ReportingApi> {
    let config = ConfigManager::load_or_default(source.config.as_deref())
        .context("加载报表分析配置失败")?;

    let project_source = open_source(&source.input, source.format.map(FileFormat::from))
        .with_context(|| format!("无法打开项目列表 {}", source.input.display()))?;

    Ok(ReportingApi::new(Arc::from(project_source), &config)?)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", output);
    Ok(())
}

fn input_label(path: &Path) -> String {
    path.display().to_string()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_with_format(if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    });

    tracing::debug!("{} v{}", portfolio_analytics::APP_NAME, portfolio_analytics::VERSION);

    match cli.command {
        Commands::Report {
            source,
            today,
            division,
            pm,
            bp,
            stages,
        } => {
            let api = build_api(&source)?;
            let filter = ReportFilter {
                division,
                project_manager: pm,
                business_partner: bp,
                stages,
            };
            let report = api
                .build_report(&filter, today)
                .with_context(|| format!("生成报表失败: {}", input_label(&source.input)))?;
            print_json(&report, source.pretty)
        }
        Commands::Trends { source } => {
            let api = build_api(&source)?;
            let trends = api
                .monthly_trends()
                .with_context(|| format!("计算月度趋势失败: {}", input_label(&source.input)))?;
            print_json(&trends, source.pretty)
        }
        Commands::Classify { source, today } => {
            let api = build_api(&source)?;
            let projects = api
                .classify_projects(today)
                .with_context(|| format!("派生项目失败: {}", input_label(&source.input)))?;
            print_json(&projects, source.pretty)
        }
    }
}
