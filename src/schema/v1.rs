use serde::{Deserialize, Serialize};

use crate::calc::compare::WorkflowComparison;
use crate::calc::risk::RiskAssessment;
use crate::scenario::WorkflowInputs;

/// One row of the per-workflow results table. Money is rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsRow {
    pub workflow: String,
    pub flowcell_cost_per_sample: Option<f64>,
    pub wet_bench: f64,
    pub bioinformatics: f64,
    pub total_cost: Option<f64>,
    pub reimbursement: f64,
    pub profit_per_test: Option<f64>,
    pub roi_percent: Option<f64>,
    pub payback_samples: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    pub samples_per_run: u64,
    pub runs_per_year: Option<u64>,
    pub profit_delta: Option<f64>,
    pub results: Vec<ResultsRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NgsCostV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub factors_version: String,
    pub inputs: WorkflowInputs,
    pub outputs: Option<Outputs>,
    pub risk: Option<RiskAssessment>,
    pub comparison: Option<WorkflowComparison>,
    pub projection_tsv_path: Option<String>,
    pub warnings: Vec<String>,
}

impl NgsCostV1 {
    pub fn empty(tool_version: &str, inputs: WorkflowInputs) -> Self {
        Self {
            tool: "kira-ngscost".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            factors_version: "v1".to_string(),
            inputs,
            outputs: None,
            risk: None,
            comparison: None,
            projection_tsv_path: None,
            warnings: Vec::new(),
        }
    }
}
