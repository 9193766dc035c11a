//! Saved scenario snapshots.
//!
//! Snapshots are keyed by a human-readable timestamp and stored behind the
//! `SessionStore` trait so the engine never owns storage lifecycle.

mod store;

pub use store::{JsonFileStore, MemoryStore, SessionStore};

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::calc::WorkflowOutputs;
use crate::scenario::WorkflowInputs;
use crate::schema::categories::{Backbone, Positioning, Region};

pub const SESSION_KEY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Flattened inputs and outputs of one scenario. Undefined ratios are `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub backbone: Backbone,
    pub reporting: String,
    pub positioning: Positioning,
    pub region: Region,
    pub batch_size: u64,
    pub cost_per_sample: Option<f64>,
    pub reimbursement: f64,
    pub profit: Option<f64>,
    pub roi: Option<f64>,
    pub payback: Option<f64>,
    pub risk_score: f64,
}

impl SessionSnapshot {
    pub fn from_scenario(inputs: &WorkflowInputs, outputs: &WorkflowOutputs) -> Self {
        Self {
            backbone: inputs.backbone,
            reporting: inputs.reporting.clone(),
            positioning: inputs.positioning,
            region: inputs.region,
            batch_size: inputs.batch_size,
            cost_per_sample: outputs.total_cost_current,
            reimbursement: inputs.reimbursement_per_test,
            profit: outputs.profit_current,
            roi: outputs.roi_percent,
            payback: outputs.payback_samples,
            risk_score: outputs.risk.score,
        }
    }
}

pub fn session_key<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    now.format(SESSION_KEY_FORMAT).to_string()
}

pub fn export_json(snapshot: &SessionSnapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot).context("failed to serialize session snapshot")
}

pub fn import_json(content: &str) -> Result<SessionSnapshot> {
    serde_json::from_str(content).context("failed to parse session snapshot")
}
