use crate::calc::WorkflowOutputs;
use crate::calc::cost::round2;
use crate::scenario::WorkflowInputs;
use crate::schema::v1::ResultsRow;

pub mod json_writer;
pub mod summary;
pub mod tsv_writer;

/// Current and bundle rows of the results table, rounded to cents.
pub fn results_rows(inputs: &WorkflowInputs, outputs: &WorkflowOutputs) -> Vec<ResultsRow> {
    let flowcell = outputs.flowcell_cost_per_sample.map(round2);
    vec![
        ResultsRow {
            workflow: "Current".to_string(),
            flowcell_cost_per_sample: flowcell,
            wet_bench: inputs.wet_bench_cost,
            bioinformatics: inputs.bioinformatics_cost,
            total_cost: outputs.total_cost_current.map(round2),
            reimbursement: inputs.reimbursement_per_test,
            profit_per_test: outputs.profit_current.map(round2),
            roi_percent: outputs.roi_percent.map(round2),
            payback_samples: outputs.payback_samples.map(round2),
        },
        ResultsRow {
            workflow: "Bundle".to_string(),
            flowcell_cost_per_sample: flowcell,
            wet_bench: inputs.bundle_cost,
            bioinformatics: 0.0,
            total_cost: outputs.total_cost_alt.map(round2),
            reimbursement: inputs.reimbursement_per_test,
            profit_per_test: outputs.profit_alt.map(round2),
            roi_percent: outputs.roi_percent_alt.map(round2),
            payback_samples: outputs.payback_samples_alt.map(round2),
        },
    ]
}

/// `N/A` for undefined values, cents otherwise.
pub(crate) fn fmt_money(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "N/A".to_string(),
    }
}
