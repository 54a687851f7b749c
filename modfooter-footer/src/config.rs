//! Footer configuration, read from an optional `footer.toml`.
//!
//! ```toml
//! detailed = true
//! utc_offset_minutes = 120
//!
//! [links]
//! content_manager_root = "/plugins/content-manager"
//! uid_prefix = "application"
//! ```

use crate::FooterResult;
use chrono::{FixedOffset, Offset, Utc};
use modfooter_relations::LinkConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub links: LinkConfig,
    /// Offset applied to zoned timestamps before display.
    pub utc_offset_minutes: i32,
    /// Default for the detailed relation text.
    pub detailed: bool,
}

impl FooterConfig {
    /// Parses a config from TOML. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> FooterResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads config from `path`, falling back to defaults when the file is
    /// missing, unreadable or invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No footer config found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded footer config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!(
                        "Failed to parse footer config {:?}: {}. Falling back to defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read footer config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// The display offset. Out-of-range values fall back to UTC.
    pub fn display_offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| {
                warn!(
                    "utc_offset_minutes {} is out of range, using UTC",
                    self.utc_offset_minutes
                );
                Utc.fix()
            })
    }
}
