use std::process::ExitCode;

/// Exit status reported after a successful run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitPolicy {
    /// Exit with 0, the usual success status.
    Conventional,
    /// Exit with 1 like the legacy generator did, for scripts that expect it.
    Legacy,
}

#[derive(Clone, Debug)]
pub struct RunConfig {
    pub exit_policy: ExitPolicy,
}

impl RunConfig {
    pub fn from_args(legacy_exit_status: bool) -> Self {
        let exit_policy = if legacy_exit_status {
            ExitPolicy::Legacy
        } else {
            ExitPolicy::Conventional
        };
        Self { exit_policy }
    }

    pub fn exit_status(&self) -> u8 {
        match self.exit_policy {
            ExitPolicy::Conventional => 0,
            ExitPolicy::Legacy => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::from_args(false)
    }
}
