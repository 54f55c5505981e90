use super::super::evaluation::PerformanceAggregate;
use super::views::{PerformanceInsights, ScoreBand, ScorecardView, TrendPoint};

impl PerformanceAggregate {
    /// Project the aggregate into the serialized scorecard shape, with the
    /// calendar buckets flattened into sorted trend series.
    pub fn summary(&self) -> ScorecardView {
        let daily_trend = self
            .daily_buckets
            .iter()
            .map(|(date, bucket)| TrendPoint {
                period: date.format("%Y-%m-%d").to_string(),
                completed: bucket.completed,
                reassigned: bucket.reassigned,
            })
            .collect();

        let monthly_trend = self
            .monthly_buckets
            .iter()
            .map(|(month, bucket)| TrendPoint {
                period: month.clone(),
                completed: bucket.completed,
                reassigned: bucket.reassigned,
            })
            .collect();

        let band = ScoreBand::for_score(self.total_performance_score);

        ScorecardView {
            employee_id: self.employee_id.clone(),
            total_assigned: self.total_assigned,
            completed_count: self.completed_count,
            on_time_count: self.on_time_count,
            reassigned_count: self.reassigned_count,
            completion_rate: self.completion_rate,
            on_time_rate: self.on_time_rate,
            productivity_score: self.productivity_score,
            review_score: self.review_score,
            hr_feedback_score: self.hr_feedback_score,
            total_performance_score: self.total_performance_score,
            band,
            band_label: band.label(),
            daily_trend,
            monthly_trend,
        }
    }

    pub fn insights(&self) -> PerformanceInsights {
        super::generate_insights(self)
    }
}
