//! Command-line options and seed data for the terminal host

use crate::nav::HexCode;
use crate::services::{Friend, MemoryStore, Message, PendingRequest};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Pager-style messaging client driven by five buttons
#[derive(Debug, Clone, Parser)]
#[command(name = "pagerlink", version, about)]
pub struct Cli {
    /// TOML file with friends, pending requests and messages to start with
    #[arg(long, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Your own friend code, shown on the MY CODE screen (overrides the seed file)
    #[arg(long, value_name = "CODE")]
    pub my_code: Option<HexCode>,

    /// Write logs here; logging is off without it (filter with PAGERLINK_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Give up on a clipboard read after this many milliseconds
    #[arg(long, value_name = "MS", default_value_t = 2_000)]
    pub clipboard_timeout_ms: u64,

    /// Input poll interval in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 50)]
    pub tick_ms: u64,
}

impl Cli {
    pub fn clipboard_timeout(&self) -> Duration {
        Duration::from_millis(self.clipboard_timeout_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

/// Contents of a `--seed` file.
///
/// ```toml
/// my_code = "C0FFEE00"
///
/// [[friends]]
/// code = "DEADBEEF"
/// status = "online"
///
/// [[requests]]
/// code = "1A2B3C4D"
/// received_at = "2024-05-01T12:00:00Z"
///
/// [[messages]]
/// sender = "DEADBEEF"
/// text = "143"
/// received_at = "2024-05-01T12:05:00Z"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedData {
    pub my_code: Option<HexCode>,
    #[serde(default)]
    pub friends: Vec<Friend>,
    #[serde(default)]
    pub requests: Vec<PendingRequest>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl SeedData {
    pub fn parse(path: &Path, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &text)
    }

    /// Replace the seed's own code when one was given on the command line
    pub fn with_my_code(mut self, my_code: Option<HexCode>) -> Self {
        if my_code.is_some() {
            self.my_code = my_code;
        }
        self
    }

    pub fn into_store(self) -> MemoryStore {
        MemoryStore::seeded(self.my_code, self.friends, self.requests, self.messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{FriendService, FriendServiceError, ListDataSource, OnlineStatus};

    #[test]
    fn test_seed_parses_all_sections() {
        let text = r#"
            my_code = "c0ffee00"

            [[friends]]
            code = "DEADBEEF"
            status = "online"

            [[friends]]
            code = "0000 0001"

            [[requests]]
            code = "1A2B3C4D"
            received_at = "2024-05-01T12:00:00Z"

            [[messages]]
            sender = "DEADBEEF"
            text = "143"
            received_at = "2024-05-01T12:05:00Z"
        "#;

        let seed = SeedData::parse(Path::new("seed.toml"), text).unwrap();
        assert_eq!(seed.my_code, Some(HexCode::parse("C0FFEE00").unwrap()));
        assert_eq!(seed.friends[0].status, OnlineStatus::Online);
        assert_eq!(seed.friends[1].status, OnlineStatus::Offline);

        let store = seed.into_store();
        let counts = store.counts();
        assert_eq!((counts.friends, counts.pending, counts.messages), (2, 1, 1));
    }

    #[test]
    fn test_seed_rejects_bad_code() {
        let err = SeedData::parse(Path::new("seed.toml"), "my_code = \"nope\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["pagerlink"]);
        assert_eq!(cli.clipboard_timeout(), Duration::from_secs(2));
        assert_eq!(cli.tick(), Duration::from_millis(50));
        assert!(cli.seed.is_none());
    }

    #[tokio::test]
    async fn test_cli_code_reaches_the_store() {
        let own = HexCode::parse("C0FFEE00").unwrap();
        let cli = Cli::parse_from(["pagerlink", "--my-code", "c0ffee00"]);
        assert_eq!(cli.my_code, Some(own));

        let store = SeedData::default().with_my_code(cli.my_code).into_store();
        assert_eq!(store.my_code(), Some(own));
        assert_eq!(
            store.send_request(own).await,
            Err(FriendServiceError::SelfRequest)
        );
    }

    #[test]
    fn test_seed_code_kept_without_override() {
        let seeded = HexCode::parse("12345678").unwrap();
        let seed = SeedData {
            my_code: Some(seeded),
            ..SeedData::default()
        };
        assert_eq!(seed.with_my_code(None).into_store().my_code(), Some(seeded));
    }
}
