// src/dashboard/histogram.rs

//! Equal-width histograms.

use serde::Serialize;

use crate::storage::csv::write_row;

/// Header of the exported histogram table.
pub const TABLE_HEADERS: [&str; 3] = ["Borne inférieure", "Borne supérieure", "Nombre de livres"];

/// Bin counts over `bins` equal-width intervals.
///
/// Bin `i` covers `[edges[i], edges[i + 1])`; the last bin also includes its
/// upper edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` over their observed range.
    ///
    /// A constant column is widened by 0.5 on each side; an empty one uses
    /// the range `0..1`.
    pub fn compute(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let min = values.iter().copied().reduce(f64::min);
        let max = values.iter().copied().reduce(f64::max);
        let (lo, hi) = match min.zip(max) {
            None => (0.0, 1.0),
            Some((lo, hi)) if lo == hi => (lo - 0.5, hi + 0.5),
            Some(range) => range,
        };

        let width = (hi - lo) / bins as f64;
        let edges = (0..=bins)
            .map(|i| if i == bins { hi } else { lo + width * i as f64 })
            .collect();

        let mut counts = vec![0; bins];
        for v in values {
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }
        Self { edges, counts }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Render the bins as a CSV table.
    pub fn to_csv(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        let _ = write_row(&mut buf, &TABLE_HEADERS);
        for (i, count) in self.counts.iter().enumerate() {
            let _ = write_row(
                &mut buf,
                &[
                    format!("{:.2}", self.edges[i]),
                    format!("{:.2}", self.edges[i + 1]),
                    count.to_string(),
                ],
            );
        }
        buf
    }

    /// Render horizontal text bars scaled to `width` characters.
    pub fn render_bars(&self, width: usize) -> String {
        let peak = self.counts.iter().copied().max().unwrap_or(0).max(1);
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let len = count * width / peak;
                format!(
                    "{:>8.2} - {:>8.2} | {:<width$} {}",
                    self.edges[i],
                    self.edges[i + 1],
                    "█".repeat(len),
                    count,
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
