use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Serializable state of one tween.
///
/// Callbacks and accessor overrides are not serializable and are lost
/// across a snapshot/restore cycle; a `Custom` easing is encoded as no
/// name and restores as linear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TweenSnapshot {
    /// Target name, resolved back to a live target on restore
    pub tag: String,
    /// Property values captured when the tween began
    pub start_values: HashMap<String, f64>,
    /// Configured end values
    pub end_values: HashMap<String, f64>,
    /// Ticks already consumed by the interpolation
    pub elapsed: u32,
    /// Total interpolation ticks
    pub duration_ticks: u32,
    /// Remaining start delay
    pub delay_ticks: u32,
    /// Easing name, if the easing has one
    pub easing: Option<String>,
    /// Whether the tween was paused
    pub paused: bool,
    /// Follow-up tweens, not yet started
    pub chained: Vec<TweenSnapshot>,
}

/// Serializable contents of a registry, taken between ticks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub tweens: Vec<TweenSnapshot>,
}

impl RegistrySnapshot {
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

/// Supported snapshot encodings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum SnapshotFormat {
    /// JSON for human-readable snapshots
    #[default]
    Json,
    /// Binary for efficient storage and transmission
    Binary,
}

impl SnapshotFormat {
    /// Encode a registry snapshot to bytes
    pub fn encode(&self, snapshot: &RegistrySnapshot) -> Result<Vec<u8>> {
        match self {
            SnapshotFormat::Json => {
                let json = serde_json::to_string_pretty(snapshot)?;
                Ok(json.into_bytes())
            }
            SnapshotFormat::Binary => {
                let bytes = bincode::serialize(snapshot)?;
                Ok(bytes)
            }
        }
    }

    /// Decode a registry snapshot from bytes
    pub fn decode(&self, bytes: &[u8]) -> Result<RegistrySnapshot> {
        match self {
            SnapshotFormat::Json => {
                let snapshot: RegistrySnapshot = serde_json::from_slice(bytes)?;
                Ok(snapshot)
            }
            SnapshotFormat::Binary => {
                let snapshot: RegistrySnapshot = bincode::deserialize(bytes)?;
                Ok(snapshot)
            }
        }
    }

    /// Get the file extension for this format
    pub fn file_extension(&self) -> &str {
        match self {
            SnapshotFormat::Json => "json",
            SnapshotFormat::Binary => "bin",
        }
    }
}
