use log::{debug, info};

/// Tags progress records with the step that produced them.
pub struct LogManager {
    step: &'static str,
}

impl LogManager {
    pub fn new(step: &'static str) -> Self {
        Self { step }
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.step, message);
    }

    pub fn detail(&self, message: &str) {
        debug!("[{}] {}", self.step, message);
    }
}
