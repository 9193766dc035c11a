use anyhow::{Context, Result};
use tracing::info;

use crate::calc::evaluate;
use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage3Evaluate;

impl Stage3Evaluate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Evaluate {
    fn name(&self) -> &'static str {
        "stage3_evaluate"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let table = ctx.factors.as_ref().context("risk factors not loaded")?;
        let outputs = evaluate(&ctx.inputs, table)?;
        if outputs.samples_per_run == 0 {
            ctx.warnings
                .push("no samples fit on a run; per-sample costs are N/A".to_string());
        }
        info!(
            samples_per_run = outputs.samples_per_run,
            risk_score = outputs.risk.score,
            "outputs_ready"
        );
        ctx.outputs = Some(outputs);
        Ok(())
    }
}
