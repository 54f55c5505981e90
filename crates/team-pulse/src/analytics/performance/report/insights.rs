use super::super::evaluation::PerformanceAggregate;
use super::views::{PerformanceInsights, ScoreBand};

pub(crate) fn generate_insights(aggregate: &PerformanceAggregate) -> PerformanceInsights {
    let band = ScoreBand::for_score(aggregate.total_performance_score);

    let mut observations = Vec::new();
    if aggregate.total_assigned > 0 {
        observations.push(format!(
            "{} of {} tasks complete ({:.0}% completion)",
            aggregate.completed_count, aggregate.total_assigned, aggregate.completion_rate
        ));
    } else {
        observations.push("No tasks assigned in this snapshot".to_string());
    }

    if aggregate.completed_count > 0 && aggregate.on_time_rate < 60.0 {
        observations.push(format!(
            "On-time delivery at {:.0}% is dragging the overall score",
            aggregate.on_time_rate
        ));
    }

    if aggregate.reassigned_count > aggregate.completed_count {
        observations.push(format!(
            "Reassignment churn ({}) exceeds completed work ({})",
            aggregate.reassigned_count, aggregate.completed_count
        ));
    }

    if aggregate.hr_feedback_score == 0.0 {
        observations.push("No HR feedback recorded for the selected date".to_string());
    }

    let mut recommended_focus = Vec::new();
    match band {
        ScoreBand::AtRisk => {
            recommended_focus
                .push("Review current workload and unblock overdue items first".to_string());
        }
        ScoreBand::Monitor => {
            recommended_focus
                .push("Watch due dates closely; prioritize nearly-due tasks".to_string());
        }
        ScoreBand::Solid | ScoreBand::Excellent => {}
    }

    if aggregate.completed_count > 0 && aggregate.review_score == 0.0 {
        recommended_focus.push("Request reviews for completed work to lift the review score".to_string());
    }

    PerformanceInsights {
        band,
        band_label: band.label(),
        observations,
        recommended_focus,
    }
}
