//! Body stats persisted under [`FORGE_DATA_KEY`]
//!
//! The blob is `{"profile": {...}, "logs": [{date, weight, bf, note?}]}`, logs
//! oldest first. Anything unreadable falls back to [`ForgeData::default`].

use am_core::StorageBackend;
use serde::{Deserialize, Serialize};

pub const FORGE_DATA_KEY: &str = "forge_data";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgeProfile {
    pub name: String,
    pub start_weight: f64,
    #[serde(rename = "startBF")]
    pub start_bf: f64,
    #[serde(rename = "goalBF")]
    pub goal_bf: f64,
}

impl Default for ForgeProfile {
    fn default() -> Self {
        Self {
            name: "Alex".to_string(),
            start_weight: 180.0,
            start_bf: 16.0,
            goal_bf: 12.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForgeLog {
    pub date: String,
    pub weight: f64,
    pub bf: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForgeData {
    pub profile: ForgeProfile,
    pub logs: Vec<ForgeLog>,
}

impl ForgeData {
    /// Read from storage; missing, unreadable or malformed data yields defaults
    pub fn load(storage: &dyn StorageBackend) -> Self {
        match storage.read(FORGE_DATA_KEY) {
            Ok(Some(text)) => serde_json::from_str(&text).unwrap_or_else(|e| {
                ::log::warn!("Ignoring malformed {}: {}", FORGE_DATA_KEY, e);
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(e) => {
                ::log::warn!("Failed to read {} from {}: {}", FORGE_DATA_KEY, storage.name(), e);
                Self::default()
            }
        }
    }

    pub fn latest(&self) -> Option<&ForgeLog> {
        self.logs.last()
    }

    pub fn current_weight(&self) -> f64 {
        self.latest().map_or(self.profile.start_weight, |log| log.weight)
    }

    pub fn current_bf(&self) -> f64 {
        self.latest().map_or(self.profile.start_bf, |log| log.bf)
    }

    /// Latest weight minus starting weight
    pub fn weight_change(&self) -> f64 {
        self.current_weight() - self.profile.start_weight
    }

    /// "+2.5 lbs", "-4 lbs", or "-" when unchanged
    pub fn weight_change_label(&self) -> String {
        let change = self.weight_change();
        if change == 0.0 {
            "-".to_string()
        } else if change > 0.0 {
            format!("+{} lbs", change)
        } else {
            format!("{} lbs", change)
        }
    }

    /// Trend line points in a 100x100 space, `None` below two logs
    ///
    /// x spreads the logs over 5..95; y maps the padded weight range onto
    /// 90..10 so heavier is higher.
    pub fn chart_points(&self) -> Option<Vec<(f64, f64)>> {
        let n = self.logs.len();
        if n < 2 {
            return None;
        }

        let weights = self.logs.iter().map(|log| log.weight);
        let min = weights.clone().fold(f64::INFINITY, f64::min) - 2.0;
        let max = weights.clone().fold(f64::NEG_INFINITY, f64::max) + 2.0;
        let range = if max - min == 0.0 { 1.0 } else { max - min };

        let last = (n - 1) as f64;
        Some(
            weights
                .enumerate()
                .map(|(i, w)| {
                    let x = i as f64 / last * 90.0 + 5.0;
                    let y = (1.0 - (w - min) / range) * 80.0 + 10.0;
                    (x, y)
                })
                .collect(),
        )
    }

    /// Up to five most recent logs, newest first
    pub fn recent_logs(&self) -> impl Iterator<Item = &ForgeLog> {
        self.logs.iter().rev().take(5)
    }
}
