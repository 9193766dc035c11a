use std::path::PathBuf;

use crate::calc::WorkflowOutputs;
use crate::calc::projection::{DEFAULT_MAX_VOLUME, Projection};
use crate::factors::RiskFactorTable;
use crate::scenario::WorkflowInputs;
use crate::schema::v1::NgsCostV1;

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
    pub projection_path: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub inputs: WorkflowInputs,
    pub factors_path: Option<PathBuf>,
    pub write_json: bool,
    pub write_tsv: bool,
    pub projection_max: u64,
    pub session_path: Option<PathBuf>,
    pub session_key: Option<String>,
    pub warnings: Vec<String>,
    pub factors: Option<RiskFactorTable>,
    pub outputs: Option<WorkflowOutputs>,
    pub projection: Option<Projection>,
    pub output: OutputPaths,
    pub report: NgsCostV1,
}

impl Ctx {
    pub fn new(
        inputs: WorkflowInputs,
        out_dir: PathBuf,
        factors_path: Option<PathBuf>,
        write_json: bool,
        write_tsv: bool,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("ngscost.json");
        let tsv_path = out_dir.join("ngscost.tsv");
        let projection_path = out_dir.join("projection.tsv");
        let report = NgsCostV1::empty(tool_version, inputs.clone());
        Self {
            inputs,
            factors_path,
            write_json,
            write_tsv,
            projection_max: DEFAULT_MAX_VOLUME,
            session_path: None,
            session_key: None,
            warnings: Vec::new(),
            factors: None,
            outputs: None,
            projection: None,
            output: OutputPaths {
                out_dir,
                json_path,
                tsv_path,
                projection_path,
            },
            report,
        }
    }

    pub fn outputs(&self) -> anyhow::Result<&WorkflowOutputs> {
        self.outputs
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("workflow outputs missing"))
    }
}
