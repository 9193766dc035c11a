pub mod compare;
pub mod cost;
pub mod projection;
pub mod risk;

use serde::{Deserialize, Serialize};

use crate::calc::compare::{ReferenceWorkflow, WorkflowComparison, WorkflowProfile};
use crate::calc::projection::Projection;
use crate::calc::risk::RiskAssessment;
use crate::error::CalcError;
use crate::factors::RiskFactorTable;
use crate::scenario::WorkflowInputs;

/// Everything derived from one `WorkflowInputs`. Values that depend on the
/// flow cell share are `None` when not a single sample fits on a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowOutputs {
    pub samples_per_run: u64,
    pub flowcell_cost_per_sample: Option<f64>,
    pub total_cost_current: Option<f64>,
    pub total_cost_alt: Option<f64>,
    pub profit_current: Option<f64>,
    pub profit_alt: Option<f64>,
    pub profit_delta: Option<f64>,
    pub roi_percent: Option<f64>,
    pub roi_percent_alt: Option<f64>,
    pub payback_samples: Option<f64>,
    pub payback_samples_alt: Option<f64>,
    pub runs_per_year: Option<u64>,
    pub risk: RiskAssessment,
    pub comparison: Option<WorkflowComparison>,
}

impl WorkflowOutputs {
    pub fn risk_score(&self) -> f64 {
        self.risk.score
    }

    /// Current-workflow projection, if its cost is defined.
    pub fn projection(&self, inputs: &WorkflowInputs) -> Option<Projection> {
        self.total_cost_current
            .map(|cost| Projection::new(inputs.reimbursement_per_test, cost))
    }
}

/// Full recomputation of one scenario. Fails only on invalid magnitudes, in
/// which case nothing is returned.
pub fn evaluate(
    inputs: &WorkflowInputs,
    table: &RiskFactorTable,
) -> Result<WorkflowOutputs, CalcError> {
    inputs.validate()?;

    let samples_per_run = cost::samples_per_run(inputs.flowcell_output_gb, inputs.panel_size_gb)?;
    let flowcell_cost_per_sample =
        cost::cost_per_sample(inputs.flowcell_cost, samples_per_run, &[]).ok();

    let total_cost_current = cost::cost_per_sample(
        inputs.flowcell_cost,
        samples_per_run,
        &[inputs.wet_bench_cost, inputs.bioinformatics_cost],
    )
    .ok();
    let total_cost_alt =
        cost::cost_per_sample(inputs.flowcell_cost, samples_per_run, &[inputs.bundle_cost]).ok();

    let reimbursement = inputs.reimbursement_per_test;
    let profit_current = total_cost_current.map(|c| cost::profit(reimbursement, c));
    let profit_alt = total_cost_alt.map(|c| cost::profit(reimbursement, c));
    let profit_delta = profit_alt.zip(profit_current).map(|(alt, cur)| alt - cur);

    let roi_percent = total_cost_current
        .zip(profit_current)
        .and_then(|(c, p)| cost::roi(p, c));
    let roi_percent_alt = total_cost_alt
        .zip(profit_alt)
        .and_then(|(c, p)| cost::roi(p, c));
    let payback_samples = total_cost_current
        .zip(profit_current)
        .and_then(|(c, p)| cost::payback_samples(c, p));
    let payback_samples_alt = total_cost_alt
        .zip(profit_alt)
        .and_then(|(c, p)| cost::payback_samples(c, p));

    let runs_per_year = if samples_per_run == 0 {
        None
    } else {
        Some(inputs.annual_volume.div_ceil(samples_per_run))
    };

    let risk = risk::assess(table, inputs.backbone, inputs.positioning, inputs.region);

    let comparison = total_cost_current.map(|c| {
        let current = WorkflowProfile {
            cost_per_sample: c,
            turnaround_days: inputs.current_turnaround_days,
            software_cost_annual: inputs.current_software_cost_annual,
            fte: inputs.current_fte,
        };
        compare::compare(current, ReferenceWorkflow::profile(), inputs.annual_volume)
    });

    Ok(WorkflowOutputs {
        samples_per_run,
        flowcell_cost_per_sample,
        total_cost_current,
        total_cost_alt,
        profit_current,
        profit_alt,
        profit_delta,
        roi_percent,
        roi_percent_alt,
        payback_samples,
        payback_samples_alt,
        runs_per_year,
        risk,
        comparison,
    })
}
