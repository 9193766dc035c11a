mod loader;

pub use loader::{load_scenario, parse_scenario};

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::schema::categories::{Backbone, PanelPreset, Platform, Positioning, Region};

/// One lab configuration. Every output is derived from this record alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowInputs {
    pub platform: Platform,
    pub panel: Option<PanelPreset>,
    pub panel_size_gb: f64,
    pub flowcell_output_gb: f64,
    pub flowcell_cost: f64,
    pub reimbursement_per_test: f64,
    pub wet_bench_cost: f64,
    pub bioinformatics_cost: f64,
    pub bundle_cost: f64,
    pub backbone: Backbone,
    pub positioning: Positioning,
    pub region: Region,
    pub reporting: String,
    pub annual_volume: u64,
    pub batch_size: u64,
    pub current_turnaround_days: f64,
    pub current_software_cost_annual: f64,
    pub current_fte: f64,
}

impl Default for WorkflowInputs {
    fn default() -> Self {
        Self {
            platform: Platform::Ns550,
            panel: Some(PanelPreset::Medium),
            panel_size_gb: PanelPreset::Medium.size_gb(),
            flowcell_output_gb: 360.0,
            flowcell_cost: 6335.0,
            reimbursement_per_test: 650.0,
            wet_bench_cost: 150.0,
            bioinformatics_cost: 110.0,
            bundle_cost: 225.0,
            backbone: Backbone::Panel,
            positioning: Positioning::FirstLine,
            region: Region::National,
            reporting: "standard".to_string(),
            annual_volume: 1000,
            batch_size: 24,
            current_turnaround_days: 10.0,
            current_software_cost_annual: 20_000.0,
            current_fte: 2.0,
        }
    }
}

impl WorkflowInputs {
    /// Selects a panel preset and its per-sample output in one step.
    pub fn with_panel(mut self, panel: PanelPreset) -> Self {
        self.panel = Some(panel);
        self.panel_size_gb = panel.size_gb();
        self
    }

    /// Sets the per-sample output directly. The preset label follows the
    /// size, and is cleared when no preset consumes exactly that much.
    pub fn with_panel_size(mut self, panel_size_gb: f64) -> Self {
        self.panel = PanelPreset::from_size(panel_size_gb);
        self.panel_size_gb = panel_size_gb;
        self
    }

    /// Rejects the whole scenario on the first magnitude violation.
    pub fn validate(&self) -> Result<(), CalcError> {
        positive("panel_size_gb", self.panel_size_gb)?;
        positive("flowcell_output_gb", self.flowcell_output_gb)?;
        positive("flowcell_cost", self.flowcell_cost)?;
        non_negative("reimbursement_per_test", self.reimbursement_per_test)?;
        non_negative("wet_bench_cost", self.wet_bench_cost)?;
        non_negative("bioinformatics_cost", self.bioinformatics_cost)?;
        non_negative("bundle_cost", self.bundle_cost)?;
        at_least_one("annual_volume", self.annual_volume)?;
        at_least_one("batch_size", self.batch_size)?;
        non_negative("current_turnaround_days", self.current_turnaround_days)?;
        non_negative(
            "current_software_cost_annual",
            self.current_software_cost_annual,
        )?;
        non_negative("current_fte", self.current_fte)?;
        Ok(())
    }

    /// Non-fatal observations about a scenario that passed validation.
    pub fn warnings(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.panel_size_gb > self.flowcell_output_gb {
            out.push(format!(
                "panel size {} Gb exceeds flow cell output {} Gb; no sample fits a run",
                self.panel_size_gb, self.flowcell_output_gb
            ));
        }
        if let Some(panel) = self.panel {
            if panel.size_gb() != self.panel_size_gb {
                out.push(format!(
                    "panel_size_gb {} overrides preset '{}' ({} Gb)",
                    self.panel_size_gb,
                    panel,
                    panel.size_gb()
                ));
            }
        }
        if self.reimbursement_per_test == 0.0 {
            out.push("reimbursement is zero; every workflow runs at a loss".to_string());
        }
        out
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), CalcError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::InvalidMagnitude {
            field,
            value,
            constraint: "a finite number > 0",
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), CalcError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CalcError::InvalidMagnitude {
            field,
            value,
            constraint: "a finite number >= 0",
        })
    }
}

fn at_least_one(field: &'static str, value: u64) -> Result<(), CalcError> {
    if value >= 1 {
        Ok(())
    } else {
        Err(CalcError::InvalidMagnitude {
            field,
            value: value as f64,
            constraint: ">= 1",
        })
    }
}
