use serde::{Deserialize, Serialize};

use crate::calc::cost::{annual_cost, break_even_volume};

/// The operational side of a workflow: what it costs per sample and per year,
/// how long it takes and how many people it needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkflowProfile {
    pub cost_per_sample: f64,
    pub turnaround_days: f64,
    pub software_cost_annual: f64,
    pub fte: f64,
}

pub struct ReferenceWorkflow;

impl ReferenceWorkflow {
    pub const COST_PER_SAMPLE: f64 = 75.0;
    pub const TURNAROUND_DAYS: f64 = 5.0;
    pub const SOFTWARE_COST_ANNUAL: f64 = 0.0;
    pub const FTE: f64 = 1.0;

    pub fn profile() -> WorkflowProfile {
        WorkflowProfile {
            cost_per_sample: Self::COST_PER_SAMPLE,
            turnaround_days: Self::TURNAROUND_DAYS,
            software_cost_annual: Self::SOFTWARE_COST_ANNUAL,
            fte: Self::FTE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowComparison {
    pub current: WorkflowProfile,
    pub alternative: WorkflowProfile,
    pub annual_volume: u64,
    pub annual_cost_current: f64,
    pub annual_cost_alt: f64,
    pub annual_savings: f64,
    pub per_sample_savings: f64,
    pub break_even_volume: Option<f64>,
    pub turnaround_saved_days: f64,
    pub fte_saved: f64,
}

impl WorkflowComparison {
    /// Whole samples after which the switch has paid for itself.
    pub fn break_even_samples(&self) -> Option<u64> {
        self.break_even_volume.map(|v| v.max(0.0).floor() as u64)
    }
}

/// Break-even recovers the difference in fixed annual cost through the
/// per-sample savings of the alternative workflow.
pub fn compare(
    current: WorkflowProfile,
    alternative: WorkflowProfile,
    annual_volume: u64,
) -> WorkflowComparison {
    let annual_cost_current = annual_cost(
        current.cost_per_sample,
        annual_volume,
        current.software_cost_annual,
    );
    let annual_cost_alt = annual_cost(
        alternative.cost_per_sample,
        annual_volume,
        alternative.software_cost_annual,
    );
    let per_sample_savings = current.cost_per_sample - alternative.cost_per_sample;
    let fixed_delta = current.software_cost_annual - alternative.software_cost_annual;

    WorkflowComparison {
        current,
        alternative,
        annual_volume,
        annual_cost_current,
        annual_cost_alt,
        annual_savings: annual_cost_current - annual_cost_alt,
        per_sample_savings,
        break_even_volume: break_even_volume(fixed_delta, per_sample_savings),
        turnaround_saved_days: current.turnaround_days - alternative.turnaround_days,
        fte_saved: current.fte - alternative.fte,
    }
}
