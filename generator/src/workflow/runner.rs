use crate::workflow::config::RunConfig;
use anyhow::Context;
use lutcore::analysis::TableStats;
use lutcore::telemetry::LogManager;
use lutcore::{write_initializer, SineTable};
use std::io::{BufWriter, Write};

pub struct RunReport {
    pub bytes_written: usize,
    pub stats: TableStats,
}

#[derive(Clone)]
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Generates the table and writes its C initializer to `out`.
    pub fn execute<W: Write>(&self, out: W) -> anyhow::Result<RunReport> {
        let logger = LogManager::new("lutgen");

        let table = SineTable::generate();
        let stats = TableStats::from_table(&table);
        logger.record(&format!(
            "generated {} samples, range {}..={}, dominant bin {}",
            table.len(),
            stats.min,
            stats.max,
            stats.dominant_bin
        ));
        if let Ok(json) = stats.to_json() {
            logger.detail(&json);
        }

        let mut writer = BufWriter::new(out);
        let bytes_written =
            write_initializer(&table, &mut writer).context("writing lookup table")?;
        writer.flush().context("flushing lookup table")?;
        logger.record(&format!("wrote {} bytes", bytes_written));

        Ok(RunReport {
            bytes_written,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runner_writes_complete_initializer() {
        let runner = Runner::new(RunConfig::default());
        let mut buffer = Vec::new();
        let report = runner.execute(&mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(report.bytes_written, text.len());
        assert!(text.starts_with("uint8_t sine_lookup[200] = {100,"));
        assert!(text.ends_with("};\n"));
        assert_eq!(text.matches(',').count(), 199);
        assert_eq!(report.stats.dominant_bin, 1);
    }

    #[test]
    fn runner_output_is_repeatable() {
        let runner = Runner::new(RunConfig::from_args(true));
        let mut first = Vec::new();
        let mut second = Vec::new();
        runner.execute(&mut first).unwrap();
        runner.execute(&mut second).unwrap();
        assert_eq!(first, second);
        assert_eq!(runner.config().exit_status(), 1);
    }
}
