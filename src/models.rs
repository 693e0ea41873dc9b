use std::fmt;

use serde::Serialize;

use crate::decoder::{EpochSeconds, Format};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConversionResult {
    pub input: String,
    pub format: Format,
    pub epoch_seconds: EpochSeconds,

    #[serde(rename = "UTC")]
    pub utc: String,
    pub local: String,

    // None - целевая зона не запрашивалась
    pub target: Option<TargetTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "Status", rename_all_fields = "PascalCase")]
pub enum TargetTime {
    Rendered {
        zone: String,
        timestamp: String,
        abbreviation: String,
    },
    /// reason: "Invalid Timezone" или "Timezone Error"
    Unavailable { zone: String, reason: String },
}

impl TargetTime {
    pub fn zone(&self) -> &str {
        match self {
            TargetTime::Rendered { zone, .. } | TargetTime::Unavailable { zone, .. } => zone,
        }
    }
}

impl fmt::Display for TargetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetTime::Rendered { timestamp, abbreviation, .. } => {
                write!(f, "{} {}", timestamp, abbreviation)
            }
            TargetTime::Unavailable { reason, .. } => f.write_str(reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GuessEntry {
    pub format: Format,
    pub format_name: &'static str,
    pub epoch_seconds: EpochSeconds,
    #[serde(rename = "UTC")]
    pub utc: String,
}

/// Результат угадывания: только правдоподобные совпадения, в порядке каталога.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GuessReport {
    pub input: String,
    pub entries: Vec<GuessEntry>,
}

impl GuessReport {
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn formats(&self) -> Vec<Format> {
        self.entries.iter().map(|e| e.format).collect()
    }
}
