use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::scenario::{WorkflowInputs, load_scenario};
use crate::schema::categories::{Backbone, PanelPreset, Platform, Positioning, Region};

#[derive(Debug, Parser)]
#[command(
    name = "kira-ngscost",
    version,
    about = "Sequencing workflow cost and payer-risk comparison"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Validate(ValidateArgs),
    Factors(FactorsArgs),
    Session(SessionArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    #[arg(long, default_value = ".", help = "Output directory for --json/--tsv")]
    pub out: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    #[arg(long, default_value_t = 100, help = "Largest volume in the projection table")]
    pub projection: u64,

    #[arg(long, help = "Factor TSV to overlay on the built-in risk table")]
    pub factors: Option<PathBuf>,

    #[arg(long, help = "Session store (JSON) to save this scenario into")]
    pub session: Option<PathBuf>,

    #[arg(long, help = "Session key (default: local timestamp)")]
    pub session_key: Option<String>,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    #[arg(long, help = "Factor TSV to overlay on the built-in risk table")]
    pub factors: Option<PathBuf>,
}

/// Scenario sources. Flags override values loaded from `--scenario`, which
/// in turn override the built-in defaults.
#[derive(Debug, Clone, Default, Args)]
pub struct ScenarioArgs {
    #[arg(long, help = "Scenario JSON file")]
    pub scenario: Option<PathBuf>,

    #[arg(long, help = "NS550 | NS2000 P3 | Aviti High")]
    pub platform: Option<Platform>,

    #[arg(long, help = "small | medium | wes | wgs")]
    pub panel: Option<PanelPreset>,

    #[arg(long, help = "Sequencing output per sample (Gb); overrides --panel")]
    pub panel_size_gb: Option<f64>,

    #[arg(long)]
    pub flowcell_output_gb: Option<f64>,

    #[arg(long)]
    pub flowcell_cost: Option<f64>,

    #[arg(long)]
    pub reimbursement: Option<f64>,

    #[arg(long)]
    pub wet_bench_cost: Option<f64>,

    #[arg(long)]
    pub bioinformatics_cost: Option<f64>,

    #[arg(long)]
    pub bundle_cost: Option<f64>,

    #[arg(long, help = "Panel | Exome | Genome")]
    pub backbone: Option<Backbone>,

    #[arg(long, help = "first-line | reflex")]
    pub positioning: Option<Positioning>,

    #[arg(long, help = "National | Northeast | South | Midwest | West")]
    pub region: Option<Region>,

    #[arg(long)]
    pub reporting: Option<String>,

    #[arg(long)]
    pub annual_volume: Option<u64>,

    #[arg(long)]
    pub batch_size: Option<u64>,

    #[arg(long)]
    pub turnaround_days: Option<f64>,

    #[arg(long)]
    pub software_cost: Option<f64>,

    #[arg(long)]
    pub fte: Option<f64>,
}

impl ScenarioArgs {
    pub fn resolve(&self) -> Result<WorkflowInputs> {
        let mut inputs = match &self.scenario {
            Some(path) => load_scenario(path)?,
            None => WorkflowInputs::default(),
        };

        if let Some(v) = self.platform {
            inputs.platform = v;
        }
        if let Some(v) = self.panel {
            inputs = inputs.with_panel(v);
        }
        // An explicit --panel keeps its label next to a custom size; a bare
        // size replaces the preset label.
        match (self.panel, self.panel_size_gb) {
            (Some(_), Some(v)) => inputs.panel_size_gb = v,
            (None, Some(v)) => inputs = inputs.with_panel_size(v),
            _ => {}
        }
        if let Some(v) = self.flowcell_output_gb {
            inputs.flowcell_output_gb = v;
        }
        if let Some(v) = self.flowcell_cost {
            inputs.flowcell_cost = v;
        }
        if let Some(v) = self.reimbursement {
            inputs.reimbursement_per_test = v;
        }
        if let Some(v) = self.wet_bench_cost {
            inputs.wet_bench_cost = v;
        }
        if let Some(v) = self.bioinformatics_cost {
            inputs.bioinformatics_cost = v;
        }
        if let Some(v) = self.bundle_cost {
            inputs.bundle_cost = v;
        }
        if let Some(v) = self.backbone {
            inputs.backbone = v;
        }
        if let Some(v) = self.positioning {
            inputs.positioning = v;
        }
        if let Some(v) = self.region {
            inputs.region = v;
        }
        if let Some(v) = &self.reporting {
            inputs.reporting = v.clone();
        }
        if let Some(v) = self.annual_volume {
            inputs.annual_volume = v;
        }
        if let Some(v) = self.batch_size {
            inputs.batch_size = v;
        }
        if let Some(v) = self.turnaround_days {
            inputs.current_turnaround_days = v;
        }
        if let Some(v) = self.software_cost {
            inputs.current_software_cost_annual = v;
        }
        if let Some(v) = self.fte {
            inputs.current_fte = v;
        }

        inputs.validate()?;
        Ok(inputs)
    }
}

#[derive(Debug, Args)]
pub struct FactorsArgs {
    #[command(subcommand)]
    pub command: FactorsCommand,
}

#[derive(Debug, Subcommand)]
pub enum FactorsCommand {
    Show(FactorsShowArgs),
}

#[derive(Debug, Args)]
pub struct FactorsShowArgs {
    #[arg(long, help = "Optional factor TSV to overlay on the built-in table")]
    pub factors: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    List(SessionListArgs),
    Show(SessionKeyArgs),
    Export(SessionExportArgs),
}

#[derive(Debug, Args)]
pub struct SessionListArgs {
    #[arg(long, help = "Session store (JSON)")]
    pub store: PathBuf,
}

#[derive(Debug, Args)]
pub struct SessionKeyArgs {
    #[arg(long, help = "Session store (JSON)")]
    pub store: PathBuf,

    #[arg(long, help = "Session key (default: most recent)")]
    pub key: Option<String>,
}

#[derive(Debug, Args)]
pub struct SessionExportArgs {
    #[arg(long, help = "Session store (JSON)")]
    pub store: PathBuf,

    #[arg(long, help = "Session key (default: most recent)")]
    pub key: Option<String>,

    #[arg(long, help = "Write the snapshot here instead of stdout")]
    pub out: Option<PathBuf>,
}
