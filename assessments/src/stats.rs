//! Aggregations behind the dashboard cards and charts.
//!
//! All functions take the record list in any order and the model currently
//! selected in the UI; records the model did not score are skipped by the
//! risk-based series but still count toward totals and averages.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use time::Date;
use time::macros::format_description;

use crate::model::ModelKey;
use crate::record::Assessment;
use crate::risk::RiskLevel;

/// Glucose is divided by this so it shares an axis with BMI.
pub const GLUCOSE_CHART_SCALE: f64 = 5.0;

/// One x-position on a trend chart.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub value: f64,
}

/// One x-position on the BMI & glucose chart.
#[derive(Clone, Debug, PartialEq)]
pub struct DualTrendPoint {
    pub label: String,
    pub bmi: f64,
    pub glucose_scaled: f64,
}

/// Count of records per risk band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RiskDistribution {
    pub low: usize,
    pub moderate: usize,
    pub high: usize,
}

impl RiskDistribution {
    #[must_use]
    pub fn count(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Low => self.low,
            RiskLevel::Moderate => self.moderate,
            RiskLevel::High => self.high,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.low + self.moderate + self.high
    }
}

/// Current vs. optimal score for one health factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HealthFactor {
    pub factor: &'static str,
    pub current: f64,
    pub optimal: f64,
}

/// Reference comparison shown on the dashboard bar chart.
pub const HEALTH_FACTORS: [HealthFactor; 4] = [
    HealthFactor { factor: "Age", current: 80.0, optimal: 90.0 },
    HealthFactor { factor: "Blood Pressure", current: 65.0, optimal: 85.0 },
    HealthFactor { factor: "BMI", current: 70.0, optimal: 80.0 },
    HealthFactor { factor: "Glucose", current: 75.0, optimal: 85.0 },
];

/// Format as `dd/MM/yyyy`.
#[must_use]
pub fn format_day(date: Date) -> String {
    date.format(format_description!("[day]/[month]/[year]")).unwrap_or_default()
}

/// Format as `MMM dd`, e.g. `Mar 10`.
#[must_use]
pub fn format_short(date: Date) -> String {
    date.format(format_description!("[month repr:short] [day]")).unwrap_or_default()
}

/// `dd/MM/yyyy` label for a record, or `-` without a usable timestamp.
#[must_use]
pub fn day_label(record: &Assessment) -> String {
    record.date().map_or_else(|| "-".to_owned(), format_day)
}

fn short_label(record: &Assessment) -> String {
    record.date().map_or_else(|| "-".to_owned(), format_short)
}

/// Records sorted oldest first. Ties and undated records keep input order,
/// with undated records first.
#[must_use]
pub fn chronological(records: &[Assessment]) -> Vec<&Assessment> {
    let mut sorted: Vec<&Assessment> = records.iter().collect();
    sorted.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    sorted
}

/// The record with the newest timestamp.
#[must_use]
pub fn latest(records: &[Assessment]) -> Option<&Assessment> {
    chronological(records).pop()
}

#[must_use]
pub fn average_bmi(records: &[Assessment]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let sum: f64 = records.iter().map(|r| r.measurements.bmi).sum();
    #[allow(clippy::cast_precision_loss)]
    Some(sum / records.len() as f64)
}

#[must_use]
pub fn risk_distribution(records: &[Assessment], model: ModelKey) -> RiskDistribution {
    let mut dist = RiskDistribution::default();
    for prediction in records.iter().filter_map(|r| r.prediction(model)) {
        match prediction.level {
            RiskLevel::Low => dist.low += 1,
            RiskLevel::Moderate => dist.moderate += 1,
            RiskLevel::High => dist.high += 1,
        }
    }
    dist
}

/// Risk percentage over time, oldest first.
#[must_use]
pub fn risk_trend(records: &[Assessment], model: ModelKey, long_labels: bool) -> Vec<TrendPoint> {
    chronological(records)
        .into_iter()
        .filter_map(|r| {
            let prediction = r.prediction(model)?;
            let label = if long_labels { day_label(r) } else { short_label(r) };
            Some(TrendPoint { label, value: prediction.percentage })
        })
        .collect()
}

/// Single-metric trend, oldest first, with `dd/MM/yyyy` labels.
#[must_use]
pub fn metric_trend(records: &[Assessment], metric: impl Fn(&Assessment) -> f64) -> Vec<TrendPoint> {
    chronological(records)
        .into_iter()
        .map(|r| TrendPoint { label: day_label(r), value: metric(r) })
        .collect()
}

/// BMI alongside scaled glucose, oldest first.
#[must_use]
pub fn bmi_glucose_trend(records: &[Assessment]) -> Vec<DualTrendPoint> {
    chronological(records)
        .into_iter()
        .map(|r| DualTrendPoint {
            label: short_label(r),
            bmi: r.measurements.bmi,
            glucose_scaled: f64::from(r.measurements.glucose) / GLUCOSE_CHART_SCALE,
        })
        .collect()
}

/// Headline numbers for the dashboard stat cards.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    /// `None` when the newest record was not scored by the selected model.
    pub latest_risk_percentage: Option<f64>,
    pub total: usize,
    pub average_bmi: Option<f64>,
    pub latest_date: Option<String>,
}

#[must_use]
pub fn summary(records: &[Assessment], model: ModelKey) -> Summary {
    let latest = latest(records);
    Summary {
        latest_risk_percentage: latest.and_then(|r| r.prediction(model)).map(|p| p.percentage),
        total: records.len(),
        average_bmi: average_bmi(records),
        latest_date: latest.and_then(Assessment::date).map(format_day),
    }
}
