use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use teamspace_core::activity::{DEFAULT_ACTIVITY_INTERVAL_SECS, DEFAULT_FEED_CAP};

/// Worker configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerConfig {
    /// Directory holding one `<key>.json` file per entity list.
    pub data_dir: PathBuf,
    /// Seconds between synthetic activity entries.
    pub activity_interval_secs: u64,
    /// Maximum number of entries kept in the activity feed.
    pub activity_feed_cap: usize,
}

impl WorkerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default  |
    /// |--------------------------|----------|
    /// | `TEAMSPACE_DATA_DIR`     | `./data` |
    /// | `ACTIVITY_INTERVAL_SECS` | `5`      |
    /// | `ACTIVITY_FEED_CAP`      | `10`     |
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let data_dir = lookup("TEAMSPACE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./data"));

        let activity_interval_secs: u64 = match lookup("ACTIVITY_INTERVAL_SECS") {
            Some(raw) => raw
                .parse()
                .context("ACTIVITY_INTERVAL_SECS must be a valid u64")?,
            None => DEFAULT_ACTIVITY_INTERVAL_SECS,
        };
        anyhow::ensure!(
            activity_interval_secs > 0,
            "ACTIVITY_INTERVAL_SECS must be greater than zero"
        );

        let activity_feed_cap: usize = match lookup("ACTIVITY_FEED_CAP") {
            Some(raw) => raw
                .parse()
                .context("ACTIVITY_FEED_CAP must be a valid usize")?,
            None => DEFAULT_FEED_CAP,
        };

        Ok(Self {
            data_dir,
            activity_interval_secs,
            activity_feed_cap,
        })
    }

    pub fn activity_interval(&self) -> Duration {
        Duration::from_secs(self.activity_interval_secs)
    }
}
