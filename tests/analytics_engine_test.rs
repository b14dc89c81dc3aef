// ==========================================
// PortfolioAnalyticsEngine 集成测试
// ==========================================
// 测试目标: 派生 → 风险分级 → 延期 → 汇总 → 月度趋势 完整链路
// 覆盖范围: RAG 判定、风险分级重叠、延期排序、团队分组、筛选
// ==========================================

mod helpers;

use helpers::{date, ProjectBuilder};
use portfolio_analytics::config::AnalyticsConfig;
use portfolio_analytics::domain::report::ReportFilter;
use portfolio_analytics::domain::types::{RagLabel, RiskTier, Stage};
use portfolio_analytics::engine::PortfolioAnalyticsEngine;
use portfolio_analytics::ProjectRecord;

// ==========================================
// 测试辅助函数
// ==========================================

fn engine() -> PortfolioAnalyticsEngine {
    PortfolioAnalyticsEngine::default()
}

fn names<'a, I>(projects: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a portfolio_analytics::DerivedProject>,
{
    projects.into_iter().map(|p| p.record.name.clone()).collect()
}

/// 混合场景: 各阶段 / 各 RAG / 部分缺字段
fn mixed_portfolio() -> Vec<ProjectRecord> {
    vec![
        ProjectBuilder::new("ERP")
            .status("implementation")
            .division("Finance")
            .pm("Alice")
            .bp("Bob")
            .implementation(Some(date(2024, 1, 5)), Some(date(2024, 1, 5)))
            .build(),
        ProjectBuilder::new("CRM")
            .status("uat")
            .division("Sales")
            .pm("Alice")
            .implementation(Some(date(2024, 1, 20)), Some(date(2024, 1, 12)))
            .planned_finish(date(2024, 1, 2))
            .build(),
        ProjectBuilder::new("Data Lake")
            .status("procurement")
            .division("Finance")
            .procurement_finish(date(2024, 3, 1))
            .build(),
        ProjectBuilder::new("Archive")
            .status("onhold")
            .division("Ops")
            .pm("Carol")
            .implementation_finish(date(2023, 1, 1))
            .build(),
        ProjectBuilder::new("Website")
            .status("done")
            .division("Sales")
            .implementation(Some(date(2023, 11, 1)), Some(date(2023, 12, 15)))
            .planned_finish(date(2023, 12, 20))
            .build(),
        ProjectBuilder::new("Mystery").status("someday").build(),
    ]
}

// ==========================================
// 典型场景
// ==========================================

#[test]
fn test_past_implementation_finish_is_red() {
    let record = ProjectBuilder::new("Late")
        .status("implementation")
        .implementation_finish(date(2024, 1, 1))
        .build();

    let derived = engine().derive(&record, date(2024, 1, 10));
    assert_eq!(derived.rag_label(), RagLabel::Red);
    assert_eq!(derived.days_until_deadline, Some(-9));
    assert_eq!(derived.finish_date, Some(date(2024, 1, 1)));
}

#[test]
fn test_four_days_left_is_amber_and_critical() {
    let record = ProjectBuilder::new("Close")
        .status("implementation")
        .implementation_finish(date(2024, 1, 1))
        .build();

    let report = engine().analyze(&[record], date(2023, 12, 28), &ReportFilter::default());
    let project = &report.projects_with_rag[0];
    assert_eq!(project.rag_label(), RagLabel::Amber);
    assert_eq!(project.days_until_deadline, Some(4));
    assert_eq!(report.risk_tiers.critical.count, 1);
    assert_eq!(report.risk_tiers.high.count, 0);
    assert_eq!(report.risk_tiers.overdue.count, 0);
}

#[test]
fn test_on_hold_is_amber_and_low_only() {
    let record = ProjectBuilder::new("Paused")
        .status("onhold")
        .implementation_finish(date(2023, 1, 1))
        .build();

    let report = engine().analyze(&[record], date(2024, 1, 10), &ReportFilter::default());
    assert_eq!(report.projects_with_rag[0].rag_label(), RagLabel::Amber);
    assert_eq!(report.projects_with_rag[0].finish_date, None);

    for tier in RiskTier::ALL {
        let expected = if tier == RiskTier::Low { 1 } else { 0 };
        assert_eq!(report.risk_tiers.bucket(tier).count, expected, "tier {:?}", tier);
    }
}

#[test]
fn test_largest_delay_is_first() {
    let records = vec![
        ProjectBuilder::new("Small")
            .status("uat")
            .implementation_finish(date(2024, 3, 3))
            .planned_finish(date(2024, 3, 1))
            .build(),
        ProjectBuilder::new("Big")
            .status("uat")
            .implementation_finish(date(2024, 3, 10))
            .planned_finish(date(2024, 3, 1))
            .build(),
        ProjectBuilder::new("OnTime")
            .status("uat")
            .implementation_finish(date(2024, 3, 1))
            .planned_finish(date(2024, 3, 1))
            .build(),
    ];

    let report = engine().analyze(&records, date(2024, 3, 15), &ReportFilter::default());
    let delays: Vec<(String, i64)> = report
        .projects_with_delays
        .iter()
        .map(|d| (d.project.record.name.clone(), d.delay))
        .collect();

    assert_eq!(
        delays,
        vec![("Big".to_string(), 9), ("Small".to_string(), 2)]
    );
}

#[test]
fn test_unassigned_pm_gets_its_own_group() {
    let records = vec![
        ProjectBuilder::new("A").status("implementation").build(),
        ProjectBuilder::new("B").status("implementation").pm("Alice").build(),
    ];

    let report = engine().analyze(&records, date(2024, 1, 1), &ReportFilter::default());
    assert_eq!(report.pm_summary.len(), 2);
    assert_eq!(report.pm_group("Unassigned").map(|g| g.count), Some(1));
    assert_eq!(report.pm_group("Alice").map(|g| g.count), Some(1));
}

// ==========================================
// 性质校验
// ==========================================

#[test]
fn test_rag_partition_and_percentages() {
    let report = engine().analyze(&mixed_portfolio(), date(2024, 1, 10), &ReportFilter::default());
    let kpis = &report.kpis;

    assert_eq!(kpis.total_projects, 6);
    assert_eq!(kpis.red_count + kpis.amber_count + kpis.green_count, 6);
    assert_eq!(kpis.on_hold_count, 1);
    assert_eq!(kpis.completed_count, 1);
    // 1/6 = 16.67% → 17
    assert_eq!(kpis.on_hold_percentage, 17);
    assert_eq!(kpis.completed_percentage, 17);
    assert_eq!(
        kpis.red_percentage,
        ((kpis.red_count as f64 / 6.0) * 100.0).round() as u32
    );
}

#[test]
fn test_empty_portfolio_has_zero_percentages() {
    let report = engine().analyze(&[], date(2024, 1, 10), &ReportFilter::default());

    assert_eq!(report.kpis.total_projects, 0);
    assert_eq!(report.kpis.red_percentage, 0);
    assert_eq!(report.kpis.green_percentage, 0);
    assert!(report.projects_by_kanban.is_empty());
    assert!(report.projects_by_division.is_empty());
    assert!(report.monthly_trends.is_empty());
    assert!(report.projects_with_delays.is_empty());
}

#[test]
fn test_every_status_resolves_to_a_known_stage() {
    let statuses = [
        "backlog", "psdpre", "psd-prep", "PSD-Ready", " approved ", "procurement",
        "implementation", "uat", "done", "on-hold", "", "garbage",
    ];
    let records: Vec<ProjectRecord> = statuses
        .iter()
        .map(|s| ProjectBuilder::new(s).status(s).build())
        .collect();

    let derived = engine().derive_all(&records, date(2024, 1, 1));
    for project in &derived {
        assert!(Stage::ALL.contains(&project.column));
    }

    assert_eq!(derived[1].column, Stage::PsdPre);
    assert_eq!(derived[3].column, Stage::PsdReady);
    assert_eq!(derived[4].column, Stage::InvApproved);
    assert_eq!(derived[9].column, Stage::OnHold);
    assert_eq!(derived[10].column, Stage::Backlog);
    assert_eq!(derived[11].column, Stage::Backlog);
}

#[test]
fn test_high_and_medium_overlap() {
    let record = ProjectBuilder::new("Overlap")
        .status("procurement")
        .procurement_finish(date(2024, 1, 13))
        .build();

    // 剩余 12 天 → High + Medium
    let report = engine().analyze(&[record], date(2024, 1, 1), &ReportFilter::default());
    assert_eq!(report.risk_tiers.high.count, 1);
    assert_eq!(report.risk_tiers.medium.count, 1);
    assert_eq!(report.risk_tiers.critical.count, 0);
    assert_eq!(report.risk_tiers.low.count, 0);
}

#[test]
fn test_done_projects_never_appear_in_risk_tiers() {
    let record = ProjectBuilder::new("Finished")
        .status("done")
        .implementation_finish(date(2024, 1, 20))
        .build();

    let report = engine().analyze(&[record], date(2024, 1, 1), &ReportFilter::default());
    for tier in RiskTier::ALL {
        assert_eq!(report.risk_tiers.bucket(tier).count, 0);
    }
    assert_eq!(report.kpis.completed_count, 1);
}

#[test]
fn test_monthly_trend_accumulates() {
    let records = vec![
        ProjectBuilder::new("A")
            .implementation(Some(date(2024, 1, 3)), Some(date(2024, 3, 1)))
            .build(),
        ProjectBuilder::new("B")
            .implementation(Some(date(2024, 1, 20)), None)
            .build(),
        ProjectBuilder::new("C")
            .implementation(Some(date(2024, 2, 2)), Some(date(2024, 2, 25)))
            .build(),
    ];

    let report = engine().analyze(&records, date(2024, 4, 1), &ReportFilter::default());
    let trend: Vec<(&str, usize, usize, usize)> = report
        .monthly_trends
        .iter()
        .map(|t| (t.month.as_str(), t.started, t.completed, t.in_progress))
        .collect();

    assert_eq!(
        trend,
        vec![("2024-01", 2, 0, 2), ("2024-02", 1, 1, 2), ("2024-03", 0, 1, 1)]
    );
}

#[test]
fn test_monthly_trend_clamps_at_zero() {
    let records = vec![
        ProjectBuilder::new("OnlyFinished")
            .implementation(None, Some(date(2024, 1, 15)))
            .build(),
        ProjectBuilder::new("Later")
            .implementation(Some(date(2024, 2, 1)), None)
            .build(),
    ];

    let trends = engine().analyze(&records, date(2024, 4, 1), &ReportFilter::default()).monthly_trends;
    assert_eq!(trends[0].in_progress, 0);
    assert_eq!(trends[1].in_progress, 1);
}

// ==========================================
// 汇总维度
// ==========================================

#[test]
fn test_pipeline_follows_board_order() {
    let report = engine().analyze(&mixed_portfolio(), date(2024, 1, 10), &ReportFilter::default());
    let columns: Vec<Stage> = report.projects_by_kanban.iter().map(|b| b.column_key).collect();

    assert_eq!(
        columns,
        vec![
            Stage::OnHold,
            Stage::Backlog,
            Stage::Procurement,
            Stage::Implementation,
            Stage::Uat,
            Stage::Done
        ]
    );
    let on_hold = report.kanban_bucket(Stage::OnHold).unwrap();
    assert_eq!(on_hold.status, "On Hold");
    assert_eq!(on_hold.top_divisions[0].division, "Ops");
}

#[test]
fn test_divisions_skip_projects_without_division() {
    let report = engine().analyze(&mixed_portfolio(), date(2024, 1, 10), &ReportFilter::default());
    let divisions: Vec<(&str, usize)> = report
        .projects_by_division
        .iter()
        .map(|d| (d.division.as_str(), d.count))
        .collect();

    // Finance / Sales 各 2 个,按首次出现顺序; Mystery 无事业部
    assert_eq!(divisions, vec![("Finance", 2), ("Sales", 2), ("Ops", 1)]);
    let counted: usize = divisions.iter().map(|(_, c)| c).sum();
    assert_eq!(counted, 5);
}

#[test]
fn test_team_groups_only_count_active_stages() {
    let report = engine().analyze(&mixed_portfolio(), date(2024, 1, 10), &ReportFilter::default());

    // Archive (onhold) / Website (done) / Mystery (backlog) 不参与分组
    assert!(report.pm_group("Carol").is_none());
    let alice = report.pm_group("Alice").unwrap();
    assert_eq!(alice.count, 2);
    assert_eq!(names(&alice.projects), vec!["ERP", "CRM"]);
    assert_eq!(report.bp_group("Bob").map(|g| g.count), Some(1));
    assert_eq!(report.bp_group("Unassigned").map(|g| g.count), Some(2));
}

// ==========================================
// 筛选与配置
// ==========================================

#[test]
fn test_filter_narrows_every_aggregate() {
    let filter = ReportFilter {
        division: Some("Finance".to_string()),
        ..ReportFilter::default()
    };

    let report = engine().analyze(&mixed_portfolio(), date(2024, 1, 10), &filter);
    assert_eq!(report.kpis.total_projects, 2);
    assert_eq!(names(&report.projects_with_rag), vec!["ERP", "Data Lake"]);
    assert_eq!(report.projects_by_division.len(), 1);
    assert_eq!(report.applied_filter, filter);
}

#[test]
fn test_filter_by_unassigned_pm_and_stage() {
    let filter = ReportFilter {
        project_manager: Some("Unassigned".to_string()),
        stages: vec![Stage::Procurement, Stage::Backlog],
        ..ReportFilter::default()
    };

    let report = engine().analyze(&mixed_portfolio(), date(2024, 1, 10), &filter);
    assert_eq!(names(&report.projects_with_rag), vec!["Data Lake", "Mystery"]);
}

#[test]
fn test_custom_amber_window() {
    let mut config = AnalyticsConfig::default();
    config.rag.amber_window_days = 30;
    let engine = PortfolioAnalyticsEngine::new(&config);

    let record = ProjectBuilder::new("Soon")
        .status("procurement")
        .procurement_finish(date(2024, 1, 21))
        .build();

    assert_eq!(engine.derive(&record, date(2024, 1, 1)).rag_label(), RagLabel::Amber);
    assert_eq!(
        PortfolioAnalyticsEngine::default()
            .derive(&record, date(2024, 1, 1))
            .rag_label(),
        RagLabel::Green
    );
}

#[test]
fn test_report_serializes_with_camel_case_keys() {
    let report = engine().analyze(&mixed_portfolio(), date(2024, 1, 10), &ReportFilter::default());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["totalProjects"], 6);
    assert!(json["projectsWithRAG"].is_array());
    assert!(json["riskTiers"]["low"]["projects"].is_array());
    assert_eq!(json["projectsWithRAG"][0]["ragStatus"]["label"], "Red");
    assert_eq!(json["generatedFor"], "2024-01-10");
}
