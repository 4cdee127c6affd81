use crate::math::{FftHelper, StatsHelper};
use crate::table::SineTable;
use serde::{Deserialize, Serialize};

/// Diagnostic summary of a generated table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableStats {
    pub min: u8,
    pub max: u8,
    pub mean: f32,
    pub rms: f32,
    /// Non-DC bin with the largest magnitude; 1 for a single clean period.
    pub dominant_bin: usize,
    /// Bin 1 magnitude over the largest other non-DC bin up to Nyquist.
    pub fundamental_ratio: f32,
}

impl TableStats {
    pub fn from_table(table: &SineTable) -> Self {
        let samples: Vec<f32> = table.iter().map(f32::from).collect();
        let min = table.iter().min().unwrap_or(0);
        let max = table.iter().max().unwrap_or(0);

        let magnitudes = FftHelper::new(samples.len()).magnitudes(&samples);
        let nyquist = magnitudes.len() / 2;
        let spectrum = magnitudes.get(1..=nyquist).unwrap_or(&[]);

        let dominant_bin = spectrum
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(offset, _)| offset + 1)
            .unwrap_or(0);
        let fundamental = spectrum.first().copied().unwrap_or(0.0);
        let strongest_other = spectrum.iter().skip(1).copied().fold(0.0f32, f32::max);
        let fundamental_ratio = if strongest_other > 0.0 {
            fundamental / strongest_other
        } else {
            f32::INFINITY
        };

        Self {
            min,
            max,
            mean: StatsHelper::mean(&samples),
            rms: StatsHelper::ac_rms(&samples),
            dominant_bin,
            fundamental_ratio,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
