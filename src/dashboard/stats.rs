// src/dashboard/stats.rs

//! Descriptive statistics over the filtered table.

use serde::Serialize;

use crate::models::BookRecord;

/// Count, mean, spread and quartiles of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; absent below two values
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnStats {
    /// Compute statistics; `None` for an empty column.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let std = (count > 1).then(|| {
            let sq: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (sq / (count - 1) as f64).sqrt()
        });

        Some(Self {
            count,
            mean,
            std,
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }
}

/// Linear-interpolated quantile of sorted, non-empty data.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Statistics for the price and rating columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub price: Option<ColumnStats>,
    pub rating: Option<ColumnStats>,
}

impl Summary {
    pub fn from_records(records: &[BookRecord]) -> Self {
        let prices: Vec<f64> = records.iter().map(|r| r.price).collect();
        let ratings: Vec<f64> = records.iter().map(|r| f64::from(r.rating)).collect();
        Self {
            price: ColumnStats::from_values(&prices),
            rating: ColumnStats::from_values(&ratings),
        }
    }

    /// Render as a fixed-width table, one row per statistic.
    pub fn render_table(&self) -> String {
        let mut lines = vec![format!("{:<8}{:>14}{:>16}", "", "Prix (£)", "Note (étoiles)")];
        let rows: [(&str, fn(&ColumnStats) -> Option<f64>); 8] = [
            ("count", |s| Some(s.count as f64)),
            ("mean", |s| Some(s.mean)),
            ("std", |s| s.std),
            ("min", |s| Some(s.min)),
            ("25%", |s| Some(s.q25)),
            ("50%", |s| Some(s.median)),
            ("75%", |s| Some(s.q75)),
            ("max", |s| Some(s.max)),
        ];

        for (label, get) in rows {
            let cell = |col: &Option<ColumnStats>| match col.as_ref().and_then(get) {
                Some(v) => format!("{v:.2}"),
                None => "-".to_string(),
            };
            lines.push(format!(
                "{:<8}{:>14}{:>16}",
                label,
                cell(&self.price),
                cell(&self.rating)
            ));
        }
        lines.join("\n")
    }
}
