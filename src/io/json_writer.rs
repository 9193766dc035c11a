use std::path::Path;

use anyhow::{Context, Result};

use crate::calc::cost::round2;
use crate::ctx::Ctx;
use crate::io::results_rows;
use crate::schema::v1::{NgsCostV1, Outputs};

pub fn build_report(ctx: &Ctx) -> Result<NgsCostV1> {
    let outputs = ctx.outputs()?;

    let report_outputs = Outputs {
        samples_per_run: outputs.samples_per_run,
        runs_per_year: outputs.runs_per_year,
        profit_delta: outputs.profit_delta.map(round2),
        results: results_rows(&ctx.inputs, outputs),
    };

    let projection_tsv_path = if ctx.write_tsv && ctx.projection.is_some() {
        ctx.report.projection_tsv_path.clone()
    } else {
        None
    };

    let factors_version = ctx
        .factors
        .as_ref()
        .map(|t| t.version.clone())
        .unwrap_or_else(|| ctx.report.factors_version.clone());

    Ok(NgsCostV1 {
        tool: "kira-ngscost".to_string(),
        version: ctx.report.version.clone(),
        schema_version: "v1".to_string(),
        factors_version,
        inputs: ctx.inputs.clone(),
        outputs: Some(report_outputs),
        risk: Some(outputs.risk.clone()),
        comparison: outputs.comparison.clone(),
        projection_tsv_path,
        warnings: ctx.warnings.clone(),
    })
}

pub fn write_json(path: &Path, report: &NgsCostV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
