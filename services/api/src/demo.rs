use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate};
use clap::Args;

use crate::infra::{default_score_weights, parse_date, InMemoryDirectory, InMemoryFeedbackStore};
use team_pulse::analytics::performance::{
    EmployeeId, FeedbackKey, PerformanceInsights, PerformanceService, ProgressStatus, ScoreWeights,
    ScorecardView, ScoringEngine, TaskBreakdown, TaskId, TaskRecord, TeamId, TeamMatrix,
};
use team_pulse::analytics::roster::{Employee, Team};
use team_pulse::analytics::snapshot::TaskSnapshotImporter;
use team_pulse::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the reporting date (defaults to today).
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Optional task snapshot CSV merged into the seeded workforce.
    #[arg(long)]
    pub(crate) snapshot_csv: Option<PathBuf>,
    /// Print the daily trend series under each scorecard.
    #[arg(long)]
    pub(crate) include_trends: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScorecardReportArgs {
    /// Employee identifier to score
    #[arg(long)]
    pub(crate) employee: String,
    /// Task snapshot CSV export to score against
    #[arg(long)]
    pub(crate) snapshot_csv: PathBuf,
    /// Reporting date for the scorecard (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Use the delivery-focused weight profile instead of the standard one
    #[arg(long)]
    pub(crate) delivery_focus: bool,
    /// Print narrative insights under the scorecard
    #[arg(long)]
    pub(crate) insights: bool,
}

pub(crate) async fn run_scorecard_report(args: ScorecardReportArgs) -> Result<(), AppError> {
    let ScorecardReportArgs {
        employee,
        snapshot_csv,
        today,
        delivery_focus,
        insights,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let records = TaskSnapshotImporter::from_path(snapshot_csv)?;

    let employee_id = EmployeeId(employee);
    let breakdown = TaskBreakdown::for_employee(&employee_id, &records, today);
    let weights = if delivery_focus {
        ScoreWeights::delivery_focus()
    } else {
        ScoreWeights::standard()
    };
    let aggregate = ScoringEngine::new(weights).evaluate(&employee_id, &breakdown, 0.0);

    println!("Scorecard for {employee_id} on {today}");
    render_scorecard(&aggregate.summary(), true);
    if insights {
        render_insights(&aggregate.insights());
    }

    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        snapshot_csv,
        include_trends,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let directory = Arc::new(InMemoryDirectory::default());
    let feedback = Arc::new(InMemoryFeedbackStore::default());
    let team_id = seed_demo_workforce_at(&directory, &feedback, today);

    if let Some(path) = snapshot_csv {
        let records = TaskSnapshotImporter::from_path(path)?;
        println!("Merged {} snapshot task(s) into the demo workforce", records.len());
        directory.extend_tasks(records);
    }

    let service = Arc::new(PerformanceService::new(
        directory,
        feedback,
        default_score_weights(),
    ));

    println!("Team Pulse demo ({today})");

    let matrix = match service.team_matrix(&team_id, today).await {
        Ok(matrix) => matrix,
        Err(err) => {
            eprintln!("demo workforce is incomplete: {err}");
            return Ok(());
        }
    };
    render_matrix(&matrix);

    for entry in &matrix.entries {
        match service.scorecard(&entry.employee_id, today).await {
            Ok(aggregate) => {
                println!("\nScorecard: {} ({})", entry.name, entry.employee_id);
                render_scorecard(&aggregate.summary(), include_trends);
                render_insights(&aggregate.insights());
            }
            Err(err) => eprintln!("could not score {}: {err}", entry.employee_id),
        }
    }

    Ok(())
}

/// Seed a three-person team with a mixed task history around `today`, plus
/// feedback documents for the reporting date.
pub(crate) fn seed_demo_workforce(
    directory: &InMemoryDirectory,
    feedback: &InMemoryFeedbackStore,
) -> TeamId {
    seed_demo_workforce_at(directory, feedback, Local::now().date_naive())
}

pub(crate) fn seed_demo_workforce_at(
    directory: &InMemoryDirectory,
    feedback: &InMemoryFeedbackStore,
    today: NaiveDate,
) -> TeamId {
    let team_id = TeamId("platform".to_string());

    for (id, name) in [("ava", "Ava Chen"), ("noah", "Noah Reyes"), ("mia", "Mia Patel")] {
        directory.insert_employee(Employee {
            id: EmployeeId(id.to_string()),
            name: name.to_string(),
            department: "Engineering".to_string(),
            team: Some(team_id.clone()),
        });
    }

    directory.insert_team(Team {
        id: team_id.clone(),
        name: "Platform".to_string(),
        created_by: EmployeeId("ava".to_string()),
        members: vec![
            EmployeeId("ava".to_string()),
            EmployeeId("noah".to_string()),
            EmployeeId("mia".to_string()),
        ],
    });

    let day = |offset: i64| today + Duration::days(offset);
    let at = |offset: i64, hour: u32| {
        day(offset)
            .and_hms_opt(hour, 0, 0)
            .expect("valid demo instant")
    };

    let mut tasks = vec![
        demo_task("t-101", "ava", ProgressStatus::Completed, day(-5), Some(at(-15, 9)), Some(at(-12, 9))),
        demo_task("t-102", "ava", ProgressStatus::Completed, day(-5), Some(at(-15, 0)), Some(at(-3, 12))),
        demo_task("t-103", "ava", ProgressStatus::InProgress, day(9), Some(at(-6, 9)), Some(at(-4, 9))),
        demo_task("t-104", "ava", ProgressStatus::NotStarted, day(14), None, None),
        demo_task("n-201", "noah", ProgressStatus::Completed, day(-5), Some(at(-15, 9)), Some(at(-13, 9))),
        demo_task("n-202", "noah", ProgressStatus::Completed, day(-5), Some(at(-15, 0)), Some(at(-5, 12))),
        demo_task("m-301", "mia", ProgressStatus::InProgress, day(6), Some(at(-2, 9)), Some(at(-1, 9))),
        demo_task("m-302", "mia", ProgressStatus::NotStarted, day(20), None, None),
    ];
    tasks[0].review_points = Some(92.0);
    tasks[1].review_points = Some(70.0);
    tasks[3].reassign_history = vec![EmployeeId("noah".to_string())];
    tasks[5].review_points = Some(85.0);
    tasks[7].reassign_history = vec![EmployeeId("ava".to_string()), EmployeeId("noah".to_string())];
    directory.extend_tasks(tasks);

    for (id, score) in [("ava", 78.0), ("noah", 64.0)] {
        let key = FeedbackKey::new(EmployeeId(id.to_string()), today);
        feedback.set(&key.document_id(), score);
    }

    team_id
}

fn demo_task(
    id: &str,
    assignee: &str,
    status: ProgressStatus,
    due: NaiveDate,
    created: Option<chrono::NaiveDateTime>,
    updated: Option<chrono::NaiveDateTime>,
) -> TaskRecord {
    TaskRecord {
        id: TaskId(id.to_string()),
        title: format!("demo task {id}"),
        assigned_to: EmployeeId(assignee.to_string()),
        progress_status: status,
        due_date: due,
        created_at: created,
        progress_updated_at: updated,
        reassign_history: Vec::new(),
        review_points: None,
    }
}

fn render_matrix(matrix: &TeamMatrix) {
    println!(
        "\nTeam matrix: {} (lead: {})",
        matrix.team_name, matrix.lead
    );
    for (rank, entry) in matrix.entries.iter().enumerate() {
        println!(
            "  {}. {} | total {:.2} | completion {:.0}% | on-time {:.0}% | {}",
            rank + 1,
            entry.name,
            entry.total_performance_score,
            entry.completion_rate,
            entry.on_time_rate,
            entry.band_label
        );
    }
}

fn render_scorecard(view: &ScorecardView, include_trends: bool) {
    println!(
        "  total {:.2} ({}) | {} assigned | {} completed | {} on time | {} reassignment(s)",
        view.total_performance_score,
        view.band_label,
        view.total_assigned,
        view.completed_count,
        view.on_time_count,
        view.reassigned_count
    );
    println!(
        "  completion {:.2} | on-time {:.2} | productivity {:.2} | review {:.2} | hr feedback {:.2}",
        view.completion_rate,
        view.on_time_rate,
        view.productivity_score,
        view.review_score,
        view.hr_feedback_score
    );

    if include_trends && !view.daily_trend.is_empty() {
        println!("  daily trend:");
        for point in &view.daily_trend {
            println!(
                "    {} | {} completed | {} reassigned",
                point.period, point.completed, point.reassigned
            );
        }
    }
}

fn render_insights(insights: &PerformanceInsights) {
    for line in &insights.observations {
        println!("  - {line}");
    }
    for line in &insights.recommended_focus {
        println!("  > {line}");
    }
}
