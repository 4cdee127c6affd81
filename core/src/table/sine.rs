/// Number of samples in one period.
pub const TABLE_LEN: usize = 200;

/// Legacy value of pi; kept at this precision so the table stays bit-exact
/// with existing consumers.
#[allow(clippy::approx_constant)]
const PI: f64 = 3.14159265;
const AMPLITUDE: f32 = 100.0;
const OFFSET: f32 = 100.0;

/// Angular distance between adjacent samples, narrowed to single precision.
fn angular_step() -> f32 {
    ((2.0 * PI) / TABLE_LEN as f64) as f32
}

/// Quantizes `sin(angle)` into the unsigned DAC range.
///
/// The conversion truncates toward zero; it does not round. Anything below
/// zero saturates to 0.
pub fn quantize(angle: f32) -> u8 {
    (angle.sin() * AMPLITUDE + OFFSET) as u8
}

/// One full period of a DC-shifted, quantized sine wave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SineTable {
    samples: [u8; TABLE_LEN],
}

impl SineTable {
    pub fn generate() -> Self {
        let step = angular_step();
        let mut samples = [0u8; TABLE_LEN];
        for (index, sample) in samples.iter_mut().enumerate() {
            *sample = quantize(index as f32 * step);
        }
        Self { samples }
    }

    pub fn samples(&self) -> &[u8; TABLE_LEN] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.samples.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.samples.iter().copied()
    }
}

impl Default for SineTable {
    fn default() -> Self {
        Self::generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_one_period_of_samples() {
        let table = SineTable::generate();
        assert_eq!(table.len(), TABLE_LEN);
        assert_eq!(table.get(TABLE_LEN), None);
    }

    #[test]
    fn samples_follow_truncating_single_precision_formula() {
        let table = SineTable::generate();
        let step = ((2.0 * PI) / 200.0) as f32;
        for (index, sample) in table.iter().enumerate() {
            let raw = (index as f32 * step).sin() * 100.0 + 100.0;
            assert_eq!(sample, raw as u8, "sample {}", index);
            assert!(f32::from(sample) <= raw.max(0.0));
        }
    }

    #[test]
    fn zero_crossing_sits_at_midpoint() {
        let table = SineTable::generate();
        assert_eq!(table.get(0), Some(100));
        let half = table.get(100).unwrap();
        assert!(half == 99 || half == 100, "got {}", half);
    }

    #[test]
    fn peak_and_trough_reach_range_limits() {
        let table = SineTable::generate();
        let peak = table.get(50).unwrap();
        assert!(peak == 199 || peak == 200, "got {}", peak);
        let trough = table.get(150).unwrap();
        assert!(trough <= 1, "got {}", trough);
        assert!(table.iter().all(|sample| sample <= 200));
    }

    #[test]
    fn first_quarter_is_non_decreasing() {
        let table = SineTable::generate();
        let quarter = &table.samples()[..=50];
        assert!(quarter.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(SineTable::generate(), SineTable::default());
    }

    #[test]
    fn quantize_truncates_instead_of_rounding() {
        // sin(0.1) * 100 + 100 = 109.98..., which rounds to 110.
        assert_eq!(quantize(0.1), 109);
    }
}
